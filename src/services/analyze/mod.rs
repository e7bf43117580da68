//! Analyze service for text, HTML and URL analysis.

mod features;
mod results;
mod service;
mod types;

pub use features::{
    CategoriesOptions, ClassificationsOptions, ConceptsOptions, EmotionOptions, EntitiesOptions,
    Features, KeywordsOptions, MetadataOptions, RelationsOptions, SemanticRolesOptions,
    SentimentOptions, SummarizationOptions, SyntaxOptions, SyntaxOptionsTokens,
};
pub use results::{
    AnalysisResults, AnalysisResultsUsage, Author, CategoriesRelevantText, CategoriesResult,
    CategoriesResultExplanation, ClassificationsResult, ConceptsResult, DisambiguationResult,
    DocumentEmotionResults, DocumentSentimentResults, EmotionResult, EmotionScores,
    EntitiesResult, EntityMention, FeatureSentimentResults, FeaturesResultsMetadata, Feed,
    KeywordsResult, RelationArgument, RelationEntity, RelationsResult, SemanticRolesEntity,
    SemanticRolesKeyword, SemanticRolesResult, SemanticRolesResultAction,
    SemanticRolesResultObject, SemanticRolesResultSubject, SemanticRolesVerb, SentenceResult,
    SentimentResult, SummarizationResult, SyntaxResult, TargetedEmotionResults,
    TargetedSentimentResults, TokenResult,
};
pub use service::{AnalyzeService, AnalyzeServiceImpl};
pub use types::AnalyzeOptions;
