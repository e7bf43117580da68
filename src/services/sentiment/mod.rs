//! Custom sentiment models.

mod service;
mod types;

pub use service::{SentimentService, SentimentServiceImpl};
pub use types::{
    CreateSentimentModelOptions, DeleteSentimentModelOptions, GetSentimentModelOptions,
    ListSentimentModelsOptions, ListSentimentModelsResponse, SentimentModel,
    UpdateSentimentModelOptions,
};
