//! Service implementations for the Watson NLU API.
//!
//! - `analyze` - text, HTML and URL analysis
//! - `models` - generic listing and deletion of custom models
//! - `sentiment` - custom sentiment models
//! - `categories` - custom categories models
//! - `classifications` - custom classifications models
//!
//! Every operation validates its options, composes one request, runs it
//! through the retry and cancellation layer and decodes the body.

pub mod analyze;
pub mod categories;
pub mod classifications;
pub mod models;
pub mod sentiment;

use crate::auth::AuthManager;
use crate::config::{ServiceSettings, SharedSettings};
use crate::context::RequestContext;
use crate::errors::{NluError, NluResult, ValidationDetail};
use crate::observability::redact_headers;
use crate::request::RequestBuilder;
use crate::resilience;
use crate::response::{decode, DetailedResponse};
use crate::transport::{HttpTransport, PreparedRequest};
use crate::types::TrainingData;
use http::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Collaborators shared by every service of one client.
#[derive(Clone)]
pub struct ServiceCore {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    settings: SharedSettings,
}

impl ServiceCore {
    /// Create a service core
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        settings: SharedSettings,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            settings,
        }
    }

    /// Snapshot of the service settings for one call.
    pub(crate) fn settings(&self) -> ServiceSettings {
        self.settings.read().clone()
    }

    /// Start a request for `segments` with authentication applied.
    pub(crate) fn request(
        &self,
        method: Method,
        settings: &ServiceSettings,
        segments: &[&str],
    ) -> NluResult<RequestBuilder> {
        Ok(RequestBuilder::new(method, settings)?
            .segments(segments)?
            .auth(self.auth_manager.as_ref()))
    }

    /// Send a composed request and decode the response body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: PreparedRequest,
        settings: &ServiceSettings,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<T>> {
        let start = Instant::now();
        debug!(
            method = %request.method,
            url = %request.url,
            auth = self.auth_manager.scheme(),
            headers = ?redact_headers(&request.headers),
            "Sending request"
        );

        let result = resilience::invoke(
            self.transport.as_ref(),
            &request,
            settings.retry.as_ref(),
            ctx,
        )
        .await
        .and_then(decode);

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(response) => info!(
                status = response.status_code,
                duration_ms,
                has_body = response.result.is_some(),
                "Request completed"
            ),
            Err(error) => warn!(
                error = %error,
                status = ?error.status_code(),
                duration_ms,
                "Request failed"
            ),
        }

        result
    }
}

/// Collects missing or empty required fields of an options model.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    details: Vec<ValidationDetail>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Requires the field to be set.
    pub(crate) fn require<T>(mut self, field: &str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.details.push(ValidationDetail::required(field));
        }
        self
    }

    /// Requires the field to be set to a non-empty string.
    pub(crate) fn require_text(mut self, field: &str, value: &Option<String>) -> Self {
        match value {
            None => self.details.push(ValidationDetail::required(field)),
            Some(text) if text.is_empty() => self.details.push(ValidationDetail::empty(field)),
            Some(_) => {}
        }
        self
    }

    /// Requires training data to be set and not known to be empty.
    pub(crate) fn require_training_data(mut self, value: &Option<TrainingData>) -> Self {
        match value {
            None => self.details.push(ValidationDetail::required("training_data")),
            Some(data) if data.is_empty() => {
                self.details.push(ValidationDetail::empty("training_data"))
            }
            Some(_) => {}
        }
        self
    }

    /// Requires an optional field, when set, to be a valid media type.
    pub(crate) fn media_type(mut self, field: &str, value: &Option<String>) -> Self {
        if let Some(text) = value {
            if text.parse::<mime::Mime>().is_err() {
                self.details.push(ValidationDetail::with_value(
                    field,
                    "not a valid media type",
                    text.as_str(),
                ));
            }
        }
        self
    }

    pub(crate) fn finish(self) -> NluResult<()> {
        if self.details.is_empty() {
            Ok(())
        } else {
            Err(NluError::validation(self.details))
        }
    }
}

/// Serialize a JSON-valued form field.
pub(crate) fn json_field<T: serde::Serialize>(value: &T) -> NluResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_collects_all_details() {
        let result = Validator::new()
            .require_text("language", &None)
            .require_text("model_id", &Some(String::new()))
            .require_training_data(&Some(TrainingData::from("")))
            .require("features", &Some(()))
            .finish();

        match result {
            Err(NluError::Validation { details, .. }) => {
                let fields: Vec<_> = details.iter().map(|d| d.field.as_str()).collect();
                assert_eq!(fields, vec!["language", "model_id", "training_data"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_media_type_check() {
        let result = Validator::new()
            .media_type("training_data_content_type", &Some("not a type".to_string()))
            .media_type("other", &Some("text/csv".to_string()))
            .media_type("unset", &None)
            .finish();

        match result {
            Err(NluError::Validation { details, .. }) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].value.as_deref(), Some("not a type"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validator_passes() {
        assert!(Validator::new()
            .require_text("language", &Some("en".to_string()))
            .finish()
            .is_ok());
    }
}
