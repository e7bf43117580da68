//! Models service for listing and deleting custom models of any kind.

mod service;
mod types;

pub use service::{ModelsService, ModelsServiceImpl};
pub use types::{DeleteModelOptions, ListModelsOptions, ListModelsResults, Model};
