//! Error categories, validation details and service error body parsing.

use serde::{Deserialize, Serialize};

/// Detailed information about a validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationDetail {
    /// The field that failed validation
    pub field: String,
    /// The error message for this field
    pub message: String,
    /// The invalid value (if available and safe to include)
    pub value: Option<String>,
}

impl ValidationDetail {
    /// Create a new validation detail
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Create a new validation detail with a value
    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: Some(value.into()),
        }
    }

    /// Detail for a required field that was not supplied.
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        Self::new(field, message)
    }

    /// Detail for a required string field that was supplied but empty.
    pub fn empty(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} cannot be empty", field);
        Self::new(field, message)
    }
}

/// Error category for classification and handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Client configuration errors
    Configuration,
    /// Authentication or authorization failures
    Authentication,
    /// Request validation errors (local, never sent)
    Validation,
    /// Rate limiting
    RateLimit,
    /// Network connectivity issues
    Network,
    /// Server-side errors
    Server,
    /// Resource not found
    NotFound,
    /// Deadline exceeded or caller cancellation
    Context,
    /// Response body could not be decoded
    Decode,
    /// Internal library errors
    Internal,
}

impl ErrorCategory {
    /// Check if errors in this category are retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::RateLimit | ErrorCategory::Network | ErrorCategory::Server
        )
    }

    /// Get a human-readable description of this category
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Configuration error",
            ErrorCategory::Authentication => "Authentication error",
            ErrorCategory::Validation => "Validation error",
            ErrorCategory::RateLimit => "Rate limit exceeded",
            ErrorCategory::Network => "Network error",
            ErrorCategory::Server => "Server error",
            ErrorCategory::NotFound => "Resource not found",
            ErrorCategory::Context => "Deadline exceeded or cancelled",
            ErrorCategory::Decode => "Response decode error",
            ErrorCategory::Internal => "Internal error",
        }
    }
}

/// Error body returned by Watson services.
///
/// The platform is not consistent about the shape; depending on the layer that
/// rejected the call the message lives in `error`, `errors[0].message`,
/// `message` or `errorMessage`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorResponse {
    /// Top-level error message
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    /// Error list (platform gateway format)
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorItem>>,
    /// Generic message field
    #[serde(default)]
    pub message: Option<String>,
    /// IAM style message field
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
    /// Numeric or string error code
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorItem {
    /// Error message
    #[serde(default)]
    pub message: Option<String>,
    /// Error code
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiErrorResponse {
    /// Extract the most specific message available.
    pub fn message(&self) -> Option<String> {
        if let Some(first) = self.errors.as_ref().and_then(|e| e.first()) {
            if let Some(message) = &first.message {
                return Some(message.clone());
            }
        }

        match &self.error {
            Some(serde_json::Value::String(s)) => return Some(s.clone()),
            Some(serde_json::Value::Object(map)) => {
                if let Some(serde_json::Value::String(s)) = map.get("message") {
                    return Some(s.clone());
                }
            }
            _ => {}
        }

        self.message.clone().or_else(|| self.error_message.clone())
    }

    /// Error code rendered as a string.
    pub fn code(&self) -> Option<String> {
        match &self.code {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => self
                .errors
                .as_ref()
                .and_then(|e| e.first())
                .and_then(|item| item.code.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_detail() {
        let detail = ValidationDetail::required("model_id");
        assert_eq!(detail.field, "model_id");
        assert_eq!(detail.message, "model_id is required");
        assert!(detail.value.is_none());

        let detail_with_value =
            ValidationDetail::with_value("version", "must be YYYY-MM-DD", "2022/04/07");
        assert_eq!(detail_with_value.value, Some("2022/04/07".to_string()));
    }

    #[test]
    fn test_error_category_retryable() {
        assert!(ErrorCategory::RateLimit.is_retryable());
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Validation.is_retryable());
        assert!(!ErrorCategory::Context.is_retryable());
        assert!(!ErrorCategory::Decode.is_retryable());
    }

    #[test]
    fn test_watson_error_body() {
        let json = r#"{"error": "unsupported text language: unknown", "code": 400}"#;
        let error: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            error.message().as_deref(),
            Some("unsupported text language: unknown")
        );
        assert_eq!(error.code().as_deref(), Some("400"));
    }

    #[test]
    fn test_gateway_error_body() {
        let json = r#"{"errors": [{"code": "not_found", "message": "model not found"}], "trace": "abc"}"#;
        let error: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message().as_deref(), Some("model not found"));
        assert_eq!(error.code().as_deref(), Some("not_found"));
    }

    #[test]
    fn test_iam_error_body() {
        let json = r#"{"errorCode": "BXNIM0415E", "errorMessage": "Provided API key could not be found"}"#;
        let error: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            error.message().as_deref(),
            Some("Provided API key could not be found")
        );
    }
}
