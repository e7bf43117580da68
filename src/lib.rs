//! # IBM Watson Natural Language Understanding Client
//!
//! Rust client for the Watson Natural Language Understanding v1 API.
//!
//! ## Features
//!
//! - Text, HTML and URL analysis with twelve optional features
//! - Custom sentiment, categories and classifications model management
//! - Multipart training data uploads from memory, files or streams
//! - Per-call cancellation and deadlines through [`RequestContext`]
//! - Opt-in retries with exponential backoff
//! - API key, bearer token or no authentication, with credentials kept in
//!   `SecretString`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_watson_nlu::services::analyze::{AnalyzeOptions, Features, KeywordsOptions};
//! use integrations_watson_nlu::{create_client, NluClient, NluConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NluConfig::builder()
//!         .version("2022-04-07")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!
//!     let features = Features::new().keywords(KeywordsOptions::default().limit(5));
//!     let response = client
//!         .analyze()
//!         .analyze(AnalyzeOptions::new(features).text("IBM Watson analyzes text."))
//!         .await?;
//!
//!     println!("{:?}", response.result);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - Authentication header management
//! - `context` - Per-call cancellation and deadlines
//! - `request` - Request composition
//! - `transport` - HTTP transport layer and request bodies
//! - `response` - Response envelope and decoding
//! - `errors` - Error types and taxonomy
//! - `types` - Types shared by several services
//! - `resilience` - Retry with backoff
//! - `observability` - Logging setup
//! - `services` - API service implementations

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

// Public modules
pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod observability;
pub mod request;
pub mod resilience;
pub mod response;
pub mod services;
pub mod transport;
pub mod types;

// Development/testing modules
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports for convenience
pub use auth::{AuthManager, BasicAuthManager, BearerTokenAuthManager, NoAuthManager};
pub use client::{create_client, NaturalLanguageUnderstanding, NluClient};
pub use config::{Authenticator, NluConfig, NluConfigBuilder, ServiceSettings};
pub use context::RequestContext;
pub use errors::{ErrorCategory, NluError, NluResult, ValidationDetail};
pub use observability::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use resilience::RetryConfig;
pub use response::DetailedResponse;
pub use transport::{HttpTransport, ReqwestTransport, TransportConfig, TransportResponse};
pub use types::{DeleteModelResults, ModelStatus, Notice, PartOfSpeech, Timestamp, TrainingData};

// Service re-exports
pub use services::analyze::{AnalysisResults, AnalyzeOptions, AnalyzeService, Features};
pub use services::categories::{CategoriesModel, CategoriesModelList, CategoriesService};
pub use services::classifications::{
    ClassificationsModel, ClassificationsModelList, ClassificationsService,
};
pub use services::models::{ListModelsResults, Model, ModelsService};
pub use services::sentiment::{ListSentimentModelsResponse, SentimentModel, SentimentService};

/// The default per-attempt timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
