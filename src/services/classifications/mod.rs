//! Custom classifications models.

mod service;
mod types;

pub use service::{ClassificationsService, ClassificationsServiceImpl};
pub use types::{
    ClassificationsModel, ClassificationsModelList, ClassificationsTrainingParameters,
    CreateClassificationsModelOptions, DeleteClassificationsModelOptions,
    GetClassificationsModelOptions, ListClassificationsModelsOptions,
    UpdateClassificationsModelOptions,
};
