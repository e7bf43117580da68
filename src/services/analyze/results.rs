//! Result tree of the analyze operation.
//!
//! Every subtree is optional and present only when the service sent its
//! key. A missing key decodes to `None`, never to an empty record.

use crate::types::PartOfSpeech;
use serde::{Deserialize, Serialize};

/// Results of an analyze call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Language of the analyzed text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// The analyzed text, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_text: Option<String>,
    /// URL of the analyzed page, for URL input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_url: Option<String>,
    /// Billing usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<AnalysisResultsUsage>,
    /// Categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoriesResult>>,
    /// Classifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<ClassificationsResult>>,
    /// Concepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Vec<ConceptsResult>>,
    /// Emotion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionResult>,
    /// Entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<EntitiesResult>>,
    /// Keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<KeywordsResult>>,
    /// Document metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeaturesResultsMetadata>,
    /// Relations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<RelationsResult>>,
    /// Semantic roles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<Vec<SemanticRolesResult>>,
    /// Sentiment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
    /// Summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarization: Option<SummarizationResult>,
    /// Syntax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<SyntaxResult>,
}

/// Usage counters of an analyze call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResultsUsage {
    /// Number of features used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<i64>,
    /// Number of characters processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_characters: Option<i64>,
    /// Number of billed text units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_units: Option<i64>,
}

/// A category in the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResult {
    /// Path of the category, e.g. `/technology and computing/software`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Confidence, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Supporting text, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<CategoriesResultExplanation>,
}

/// Text that supports a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesResultExplanation {
    /// Relevant passages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_text: Option<Vec<CategoriesRelevantText>>,
}

/// A relevant passage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesRelevantText {
    /// Passage text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A class assigned by a classifications model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationsResult {
    /// Class name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Confidence, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// A concept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptsResult {
    /// Concept name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Relevance, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
    /// Linked DBpedia resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbpedia_resource: Option<String>,
}

/// Emotion of the document and of targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Document emotion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentEmotionResults>,
    /// Emotion per target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetedEmotionResults>>,
}

/// Document-level emotion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentEmotionResults {
    /// Emotion scores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
}

/// Emotion of a target phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetedEmotionResults {
    /// Target phrase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Emotion scores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
}

/// Scores for the five basic emotions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    /// Anger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anger: Option<f64>,
    /// Disgust
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disgust: Option<f64>,
    /// Fear
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fear: Option<f64>,
    /// Joy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joy: Option<f64>,
    /// Sadness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sadness: Option<f64>,
}

/// A named entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitiesResult {
    /// Entity type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Entity name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Relevance, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
    /// Extraction confidence, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Mentions in the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<EntityMention>>,
    /// Number of mentions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Emotion toward the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
    /// Sentiment toward the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<FeatureSentimentResults>,
    /// Linked data about the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<DisambiguationResult>,
}

/// One mention of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    /// Mention text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Character offsets `[start, end)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    /// Confidence, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Sentiment toward a feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSentimentResults {
    /// Score from -1 (negative) to 1 (positive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Linked data for an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationResult {
    /// Common entity name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// DBpedia resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbpedia_resource: Option<String>,
    /// Entity subtypes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<Vec<String>>,
}

/// A keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordsResult {
    /// Number of occurrences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Relevance, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
    /// Keyword text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Emotion toward the keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionScores>,
    /// Sentiment toward the keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<FeatureSentimentResults>,
}

/// Metadata of a web page or HTML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesResultsMetadata {
    /// Authors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    /// Publication date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Primary image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// RSS/Atom feeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<Feed>>,
}

/// A document author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A feed linked from a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Feed URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A relation between entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationsResult {
    /// Confidence, 0 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Sentence containing the relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    /// Relation type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<String>,
    /// Relation arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<RelationArgument>>,
}

/// One side of a relation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationArgument {
    /// Entities in the argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RelationEntity>>,
    /// Character offsets `[start, end)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    /// Argument text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An entity in a relation argument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationEntity {
    /// Entity text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Entity type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// A subject-action-object parse of one sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesResult {
    /// Sentence text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    /// Subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<SemanticRolesResultSubject>,
    /// Action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<SemanticRolesResultAction>,
    /// Object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<SemanticRolesResultObject>,
}

/// Subject of a semantic role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesResultSubject {
    /// Subject text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Entities in the subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<SemanticRolesEntity>>,
    /// Keywords in the subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<SemanticRolesKeyword>>,
}

/// Action of a semantic role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesResultAction {
    /// Action text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Normalized action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// Main verb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<SemanticRolesVerb>,
}

/// Object of a semantic role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesResultObject {
    /// Object text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Keywords in the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<SemanticRolesKeyword>>,
}

/// Verb of an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesVerb {
    /// Verb text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Verb tense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<String>,
}

/// Entity in a semantic role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesEntity {
    /// Entity type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Entity text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Keyword in a semantic role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesKeyword {
    /// Keyword text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Sentiment of the document and of targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Document sentiment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSentimentResults>,
    /// Sentiment per target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetedSentimentResults>>,
}

/// Document-level sentiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSentimentResults {
    /// `positive`, `neutral` or `negative`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Score from -1 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Sentiment toward a target phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetedSentimentResults {
    /// Target phrase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Score from -1 to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Extractive summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizationResult {
    /// Summary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Tokens and sentences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxResult {
    /// Tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenResult>>,
    /// Sentences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<SentenceResult>>,
}

/// A token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenResult {
    /// Token text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Universal part-of-speech tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,
    /// Character offsets `[start, end)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    /// Lemma
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
}

/// A sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceResult {
    /// Sentence text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Character offsets `[start, end)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_absent_subtrees_stay_absent() {
        let results: AnalysisResults = serde_json::from_value(json!({
            "language": "en",
            "entities": [{"type": "Company", "text": "IBM", "relevance": 0.9}]
        }))
        .unwrap();

        assert_eq!(results.language.as_deref(), Some("en"));
        assert!(results.usage.is_none());
        assert!(results.sentiment.is_none());
        assert!(results.keywords.is_none());

        let entity = &results.entities.as_ref().unwrap()[0];
        assert_eq!(entity.entity_type.as_deref(), Some("Company"));
        assert!(entity.sentiment.is_none());
        assert!(entity.disambiguation.is_none());
    }

    #[test]
    fn test_empty_list_differs_from_absent() {
        let results: AnalysisResults =
            serde_json::from_value(json!({"keywords": [], "emotion": {}})).unwrap();

        assert_eq!(results.keywords, Some(vec![]));
        assert_eq!(results.emotion, Some(EmotionResult::default()));
        assert!(results.emotion.unwrap().document.is_none());
        assert!(results.concepts.is_none());
    }

    #[test]
    fn test_unknown_part_of_speech_kept() {
        let syntax: SyntaxResult = serde_json::from_value(json!({
            "tokens": [{"text": "Watson", "part_of_speech": "PROPN"}, {"text": "?", "part_of_speech": "QMARK"}]
        }))
        .unwrap();

        let tokens = syntax.tokens.unwrap();
        assert_eq!(tokens[0].part_of_speech, Some(PartOfSpeech::Propn));
        assert_eq!(
            tokens[1].part_of_speech,
            Some(PartOfSpeech::Other("QMARK".to_string()))
        );
    }

    #[test]
    fn test_reserialize_omits_absent_fields() {
        let raw = json!({"sentiment": {"document": {"label": "positive", "score": 0.8}}});
        let results: AnalysisResults = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&results).unwrap(), raw);
    }

    #[test]
    fn test_decode_full_analysis() {
        let results: AnalysisResults =
            serde_json::from_value(crate::fixtures::analysis_results()).unwrap();

        assert_eq!(results.usage.unwrap().text_characters, Some(58));
        let entity = &results.entities.unwrap()[0];
        assert_eq!(entity.mentions.as_ref().unwrap()[0].location, Some(vec![0, 10]));
        assert_eq!(
            entity.disambiguation.as_ref().unwrap().subtype,
            Some(vec!["Software".to_string()])
        );
        assert_eq!(
            results.keywords.unwrap()[0].emotion.as_ref().unwrap().joy,
            Some(0.81)
        );
        let sentiment = results.sentiment.unwrap();
        assert_eq!(
            sentiment.document.unwrap().label.as_deref(),
            Some("positive")
        );
        assert_eq!(sentiment.targets.unwrap()[0].text.as_deref(), Some("Acme"));
        let syntax = results.syntax.unwrap();
        assert_eq!(
            syntax.tokens.unwrap()[1].part_of_speech,
            Some(PartOfSpeech::Verb)
        );
        assert!(results.relations.is_none());
    }
}
