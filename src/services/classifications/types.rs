//! Types for the Classifications models service.

use crate::errors::NluResult;
use crate::services::json_field;
use crate::transport::FormData;
use crate::types::TrainingData;
use serde::{Deserialize, Serialize};

const APPLICATION_JSON: &str = "application/json";

/// Training parameters of a classifications model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationsTrainingParameters {
    /// `single_label` or `multi_label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
}

impl ClassificationsTrainingParameters {
    option_setters! {
        /// Model type.
        model_type: String,
    }
}

training_options! {
    /// Options for `POST /v1/models/classifications`.
    ///
    /// Training data is a JSON array of `{"text": ..., "labels": [...]}`.
    CreateClassificationsModelOptions {
        /// Caller metadata stored with the model
        user_metadata: serde_json::Value,
        /// Training parameters
        training_parameters: ClassificationsTrainingParameters,
    }
}

impl CreateClassificationsModelOptions {
    /// Options with the required fields.
    pub fn new(language: impl Into<String>, training_data: impl Into<TrainingData>) -> Self {
        Self {
            language: Some(language.into()),
            training_data: Some(training_data.into()),
            ..Self::default()
        }
    }

    /// Check required fields.
    pub fn validate(&self) -> NluResult<()> {
        self.training_validator().finish()
    }

    pub(crate) fn into_form(mut self) -> NluResult<FormData> {
        let form = self.take_training_form(APPLICATION_JSON)?;
        classifications_form(form, self.user_metadata.take(), self.training_parameters.take())
    }
}

training_options! {
    /// Options for `PUT /v1/models/classifications/{model_id}`.
    UpdateClassificationsModelOptions {
        /// Model to update (required)
        model_id: String,
        /// Caller metadata stored with the model
        user_metadata: serde_json::Value,
        /// Training parameters
        training_parameters: ClassificationsTrainingParameters,
    }
}

impl UpdateClassificationsModelOptions {
    /// Options with the required fields.
    pub fn new(
        model_id: impl Into<String>,
        language: impl Into<String>,
        training_data: impl Into<TrainingData>,
    ) -> Self {
        Self {
            model_id: Some(model_id.into()),
            language: Some(language.into()),
            training_data: Some(training_data.into()),
            ..Self::default()
        }
    }

    /// Check required fields.
    pub fn validate(&self) -> NluResult<()> {
        self.training_validator()
            .require_text("model_id", &self.model_id)
            .finish()
    }

    pub(crate) fn into_form(mut self) -> NluResult<FormData> {
        let form = self.take_training_form(APPLICATION_JSON)?;
        classifications_form(form, self.user_metadata.take(), self.training_parameters.take())
    }
}

fn classifications_form(
    mut form: FormData,
    user_metadata: Option<serde_json::Value>,
    training_parameters: Option<ClassificationsTrainingParameters>,
) -> NluResult<FormData> {
    if let Some(metadata) = user_metadata {
        form = form.typed_text("user_metadata", json_field(&metadata)?, APPLICATION_JSON);
    }
    if let Some(parameters) = training_parameters {
        form = form.typed_text(
            "training_parameters",
            json_field(&parameters)?,
            APPLICATION_JSON,
        );
    }
    Ok(form)
}

empty_options! {
    /// Options for `GET /v1/models/classifications`.
    ListClassificationsModelsOptions
}

model_id_options! {
    /// Options for `GET /v1/models/classifications/{model_id}`.
    GetClassificationsModelOptions
}

model_id_options! {
    /// Options for `DELETE /v1/models/classifications/{model_id}`.
    DeleteClassificationsModelOptions
}

model_record! {
    /// A custom classifications model.
    ClassificationsModel {
        /// Training parameters the model was trained with
        training_parameters: ClassificationsTrainingParameters,
    }
}

/// Models returned by `GET /v1/models/classifications`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationsModelList {
    /// Classifications models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ClassificationsModel>>,
}
