//! Types for the Sentiment models service.

use crate::errors::NluResult;
use crate::transport::FormData;
use crate::types::TrainingData;
use serde::{Deserialize, Serialize};

/// Training data content type for sentiment models.
const SENTIMENT_TRAINING_CONTENT_TYPE: &str = "text/csv";

training_options! {
    /// Options for `POST /v1/models/sentiment`.
    ///
    /// Training data is CSV with `label` and `text` columns.
    CreateSentimentModelOptions {}
}

impl CreateSentimentModelOptions {
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
        self.take_training_form(SENTIMENT_TRAINING_CONTENT_TYPE)
    }
}

training_options! {
    /// Options for `PUT /v1/models/sentiment/{model_id}`.
    UpdateSentimentModelOptions {
        /// Model to update (required)
        model_id: String,
    }
}

impl UpdateSentimentModelOptions {
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
        self.take_training_form(SENTIMENT_TRAINING_CONTENT_TYPE)
    }
}

empty_options! {
    /// Options for `GET /v1/models/sentiment`.
    ListSentimentModelsOptions
}

model_id_options! {
    /// Options for `GET /v1/models/sentiment/{model_id}`.
    GetSentimentModelOptions
}

model_id_options! {
    /// Options for `DELETE /v1/models/sentiment/{model_id}`.
    DeleteSentimentModelOptions
}

model_record! {
    /// A custom sentiment model.
    SentimentModel {}
}

/// Models returned by `GET /v1/models/sentiment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSentimentModelsResponse {
    /// Sentiment models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<SentimentModel>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NluError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_form_has_required_fields_only() {
        let form = CreateSentimentModelOptions::new("en", "label,text\npositive,great")
            .into_form()
            .unwrap();

        assert_eq!(form.field_names(), vec!["language", "training_data"]);
        let part = form.part("training_data").unwrap();
        assert_eq!(part.content_type.as_deref(), Some("text/csv"));
        assert_eq!(part.filename.as_deref(), Some("training_data"));
    }

    #[test]
    fn test_optional_fields_present_when_set() {
        let form = CreateSentimentModelOptions::new("en", "label,text")
            .name("reviews")
            .version_description("")
            .into_form()
            .unwrap();

        assert_eq!(
            form.field_names(),
            vec!["language", "training_data", "name", "version_description"]
        );
    }

    #[test]
    fn test_update_requires_model_id() {
        let options = UpdateSentimentModelOptions {
            language: Some("en".to_string()),
            training_data: Some(TrainingData::from("label,text")),
            ..Default::default()
        };
        match options.validate() {
            Err(NluError::Validation { details, .. }) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "model_id");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_language_and_data() {
        let result = CreateSentimentModelOptions::default().validate();
        match result {
            Err(NluError::Validation { details, .. }) => assert_eq!(details.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
