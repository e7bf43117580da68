//! Feature selection for analyze calls.
//!
//! Each field of [`Features`] that is present requests one analysis module.
//! An empty sub-options value (e.g. `EntitiesOptions::default()`) still
//! requests the module and serializes to `{}`.

use serde::{Deserialize, Serialize};

/// Analysis modules to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Hierarchical categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoriesOptions>,
    /// Custom classifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifications: Option<ClassificationsOptions>,
    /// High-level concepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concepts: Option<ConceptsOptions>,
    /// Emotion of the document or of targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionOptions>,
    /// Named entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesOptions>,
    /// Important keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsOptions>,
    /// Document metadata (URL and HTML input only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataOptions>,
    /// Relations between entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<RelationsOptions>,
    /// Subject-action-object parses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<SemanticRolesOptions>,
    /// Sentiment of the document or of targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentOptions>,
    /// Extractive summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarization: Option<SummarizationOptions>,
    /// Tokens and sentences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<SyntaxOptions>,
}

impl Features {
    /// No features selected.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        /// Request categories.
        categories: CategoriesOptions,
        /// Request classifications.
        classifications: ClassificationsOptions,
        /// Request concepts.
        concepts: ConceptsOptions,
        /// Request emotion.
        emotion: EmotionOptions,
        /// Request entities.
        entities: EntitiesOptions,
        /// Request keywords.
        keywords: KeywordsOptions,
        /// Request metadata.
        metadata: MetadataOptions,
        /// Request relations.
        relations: RelationsOptions,
        /// Request semantic roles.
        semantic_roles: SemanticRolesOptions,
        /// Request sentiment.
        sentiment: SentimentOptions,
        /// Request a summary.
        summarization: SummarizationOptions,
        /// Request syntax.
        syntax: SyntaxOptions,
    }

    /// Whether no module is selected.
    pub fn is_empty(&self) -> bool {
        self == &Features::default()
    }
}

/// Categories options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesOptions {
    /// Return the text that supports each category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<bool>,
    /// Maximum number of categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Custom categories model ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl CategoriesOptions {
    option_setters! {
        /// Return explanations.
        explanation: bool,
        /// Maximum number of categories.
        limit: i64,
        /// Custom model ID.
        model: String,
    }
}

/// Classifications options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationsOptions {
    /// Custom classifications model ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ClassificationsOptions {
    option_setters! {
        /// Custom model ID.
        model: String,
    }
}

/// Concepts options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptsOptions {
    /// Maximum number of concepts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl ConceptsOptions {
    option_setters! {
        /// Maximum number of concepts.
        limit: i64,
    }
}

/// Emotion options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionOptions {
    /// Report document-level emotion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,
    /// Target phrases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl EmotionOptions {
    option_setters! {
        /// Report document-level emotion.
        document: bool,
        /// Target phrases.
        targets: Vec<String>,
    }
}

/// Entities options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitiesOptions {
    /// Maximum number of entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Return entity mentions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<bool>,
    /// Custom model ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Per-entity sentiment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,
    /// Per-entity emotion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

impl EntitiesOptions {
    option_setters! {
        /// Maximum number of entities.
        limit: i64,
        /// Return entity mentions.
        mentions: bool,
        /// Custom model ID.
        model: String,
        /// Per-entity sentiment.
        sentiment: bool,
        /// Per-entity emotion.
        emotion: bool,
    }
}

/// Keywords options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordsOptions {
    /// Maximum number of keywords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Per-keyword sentiment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,
    /// Per-keyword emotion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

impl KeywordsOptions {
    option_setters! {
        /// Maximum number of keywords.
        limit: i64,
        /// Per-keyword sentiment.
        sentiment: bool,
        /// Per-keyword emotion.
        emotion: bool,
    }
}

/// Metadata options. Takes no parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataOptions {}

/// Relations options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationsOptions {
    /// Custom model ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl RelationsOptions {
    option_setters! {
        /// Custom model ID.
        model: String,
    }
}

/// Semantic roles options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticRolesOptions {
    /// Maximum number of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Return keyword information for subjects and objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<bool>,
    /// Return entity information for subjects and objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<bool>,
}

impl SemanticRolesOptions {
    option_setters! {
        /// Maximum number of results.
        limit: i64,
        /// Return keywords.
        keywords: bool,
        /// Return entities.
        entities: bool,
    }
}

/// Sentiment options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentOptions {
    /// Report document-level sentiment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,
    /// Target phrases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    /// Custom sentiment model ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl SentimentOptions {
    option_setters! {
        /// Report document-level sentiment.
        document: bool,
        /// Target phrases.
        targets: Vec<String>,
        /// Custom model ID.
        model: String,
    }
}

/// Summarization options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizationOptions {
    /// Maximum number of summary sentences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl SummarizationOptions {
    option_setters! {
        /// Maximum number of sentences.
        limit: i64,
    }
}

/// Syntax options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxOptions {
    /// Token-level options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<SyntaxOptionsTokens>,
    /// Return sentences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<bool>,
}

impl SyntaxOptions {
    option_setters! {
        /// Token-level options.
        tokens: SyntaxOptionsTokens,
        /// Return sentences.
        sentences: bool,
    }
}

/// Token-level syntax options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxOptionsTokens {
    /// Return lemmas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<bool>,
    /// Return part-of-speech tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<bool>,
}

impl SyntaxOptionsTokens {
    option_setters! {
        /// Return lemmas.
        lemma: bool,
        /// Return part-of-speech tags.
        part_of_speech: bool,
    }
}
