//! Custom categories models.

mod service;
mod types;

pub use service::{CategoriesService, CategoriesServiceImpl};
pub use types::{
    CategoriesModel, CategoriesModelList, CreateCategoriesModelOptions,
    DeleteCategoriesModelOptions, GetCategoriesModelOptions, ListCategoriesModelsOptions,
    UpdateCategoriesModelOptions,
};
