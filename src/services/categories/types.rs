//! Types for the Categories models service.

use crate::errors::NluResult;
use crate::services::json_field;
use crate::transport::FormData;
use crate::types::TrainingData;
use serde::{Deserialize, Serialize};

const DEFAULT_TRAINING_CONTENT_TYPE: &str = "application/json";

training_options! {
    /// Options for `POST /v1/models/categories`.
    CreateCategoriesModelOptions {
        /// Content type of the training data (default `application/json`)
        training_data_content_type: String,
        /// Caller metadata stored with the model
        user_metadata: serde_json::Value,
    }
}

impl CreateCategoriesModelOptions {
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
        self.training_validator()
            .media_type("training_data_content_type", &self.training_data_content_type)
            .finish()
    }

    pub(crate) fn into_form(mut self) -> NluResult<FormData> {
        let content_type = self
            .training_data_content_type
            .take()
            .unwrap_or_else(|| DEFAULT_TRAINING_CONTENT_TYPE.to_string());
        categories_form(
            self.take_training_form(&content_type)?,
            self.user_metadata.take(),
        )
    }
}

training_options! {
    /// Options for `PUT /v1/models/categories/{model_id}`.
    UpdateCategoriesModelOptions {
        /// Model to update (required)
        model_id: String,
        /// Content type of the training data (default `application/json`)
        training_data_content_type: String,
        /// Caller metadata stored with the model
        user_metadata: serde_json::Value,
    }
}

impl UpdateCategoriesModelOptions {
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
            .media_type("training_data_content_type", &self.training_data_content_type)
            .finish()
    }

    pub(crate) fn into_form(mut self) -> NluResult<FormData> {
        let content_type = self
            .training_data_content_type
            .take()
            .unwrap_or_else(|| DEFAULT_TRAINING_CONTENT_TYPE.to_string());
        categories_form(
            self.take_training_form(&content_type)?,
            self.user_metadata.take(),
        )
    }
}

fn categories_form(form: FormData, user_metadata: Option<serde_json::Value>) -> NluResult<FormData> {
    Ok(match user_metadata {
        Some(metadata) => form.typed_text(
            "user_metadata",
            json_field(&metadata)?,
            DEFAULT_TRAINING_CONTENT_TYPE,
        ),
        None => form,
    })
}

empty_options! {
    /// Options for `GET /v1/models/categories`.
    ListCategoriesModelsOptions
}

model_id_options! {
    /// Options for `GET /v1/models/categories/{model_id}`.
    GetCategoriesModelOptions
}

model_id_options! {
    /// Options for `DELETE /v1/models/categories/{model_id}`.
    DeleteCategoriesModelOptions
}

model_record! {
    /// A custom categories model.
    CategoriesModel {}
}

/// Models returned by `GET /v1/models/categories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoriesModelList {
    /// Categories models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<CategoriesModel>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_training_content_type() {
        let form = CreateCategoriesModelOptions::new("en", "[]").into_form().unwrap();
        assert_eq!(form.field_names(), vec!["language", "training_data"]);
        assert_eq!(
            form.part("training_data").unwrap().content_type.as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_explicit_training_content_type_and_metadata() {
        let form = UpdateCategoriesModelOptions::new("m1", "en", "[]")
            .training_data_content_type("text/plain")
            .user_metadata(json!({"team": "nlp"}))
            .model_version("1.0.1")
            .into_form()
            .unwrap();

        assert_eq!(
            form.field_names(),
            vec!["language", "training_data", "model_version", "user_metadata"]
        );
        assert_eq!(
            form.part("training_data").unwrap().content_type.as_deref(),
            Some("text/plain")
        );
        let metadata = form.part("user_metadata").unwrap();
        assert_eq!(metadata.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_bad_training_content_type_rejected() {
        let options = CreateCategoriesModelOptions::new("en", "[]")
            .training_data_content_type("json please");
        assert!(matches!(
            options.validate(),
            Err(crate::errors::NluError::Validation { .. })
        ));
    }
}
