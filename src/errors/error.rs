//! Error types for the Watson NLU client.

use crate::errors::categories::{ErrorCategory, ValidationDetail};
use crate::transport::TransportResponse;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for Watson NLU operations
pub type NluResult<T> = Result<T, NluError>;

/// Main error type for the Watson NLU client.
///
/// Every operation returns either a response envelope or one of these. Local
/// failures (`Configuration`, `Validation`) never reach the network. Variants
/// produced by a completed exchange (HTTP failures and `Decode`) carry the
/// transport envelope, so status, headers and raw body stay inspectable.
#[derive(Error, Debug, Clone)]
pub enum NluError {
    /// Configuration error (invalid settings, missing required fields)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Validation error (missing required option, unset service URL)
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue
        message: String,
        /// List of specific validation failures
        details: Vec<ValidationDetail>,
    },

    /// Authentication or authorization error (401, 403)
    #[error("Authentication error ({status}): {message}")]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
        /// The transport envelope of the exchange
        response: Box<TransportResponse>,
    },

    /// Rate limit error (429)
    #[error("Rate limit error: {message}")]
    RateLimit {
        /// Error message describing the rate limit issue
        message: String,
        /// Duration to wait before retrying (if provided by the service)
        retry_after: Option<Duration>,
        /// The transport envelope of the exchange
        response: Box<TransportResponse>,
    },

    /// Network error (connection failed, TLS, DNS issues)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// A single attempt ran past the transport timeout
    #[error("Timeout: {message}")]
    Timeout {
        /// Error message
        message: String,
    },

    /// Server error (5xx responses)
    #[error("Server error: {message}")]
    Server {
        /// Error message from the server
        message: String,
        /// HTTP status code
        status_code: Option<u16>,
        /// Duration to wait before retrying (if provided by the service)
        retry_after: Option<Duration>,
        /// The transport envelope of the exchange
        response: Box<TransportResponse>,
    },

    /// Resource not found (404)
    #[error("Not found: {message}")]
    NotFound {
        /// Error message
        message: String,
        /// The transport envelope of the exchange
        response: Box<TransportResponse>,
    },

    /// Any other non-success HTTP status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
        /// Error code from the service
        code: Option<String>,
        /// The transport envelope of the exchange
        response: Box<TransportResponse>,
    },

    /// The caller's context deadline expired before the call completed
    #[error("Deadline exceeded: {message}")]
    DeadlineExceeded {
        /// Error message
        message: String,
    },

    /// The caller cancelled the call
    #[error("Request cancelled")]
    Cancelled,

    /// A successful response whose body is not valid JSON for the expected shape
    #[error("Decode error (HTTP {}): {message}", .response.status)]
    Decode {
        /// Error message from the JSON decoder
        message: String,
        /// The transport envelope of the exchange
        response: Box<TransportResponse>,
    },

    /// Internal error (unexpected conditions, library bugs)
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
    },
}

impl NluError {
    /// Create a validation error from field details.
    pub fn validation(details: Vec<ValidationDetail>) -> Self {
        let message = details
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        NluError::Validation { message, details }
    }

    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            NluError::Configuration { .. } => ErrorCategory::Configuration,
            NluError::Validation { .. } => ErrorCategory::Validation,
            NluError::Authentication { .. } => ErrorCategory::Authentication,
            NluError::RateLimit { .. } => ErrorCategory::RateLimit,
            NluError::Network { .. } | NluError::Timeout { .. } => ErrorCategory::Network,
            NluError::Server { .. } => ErrorCategory::Server,
            NluError::NotFound { .. } => ErrorCategory::NotFound,
            NluError::Api { status, .. } if *status >= 500 => ErrorCategory::Server,
            NluError::Api { .. } => ErrorCategory::Internal,
            NluError::DeadlineExceeded { .. } | NluError::Cancelled => ErrorCategory::Context,
            NluError::Decode { .. } => ErrorCategory::Decode,
            NluError::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Returns true if this error may succeed when the exchange is repeated.
    ///
    /// Retryable errors include:
    /// - Rate limit errors (429)
    /// - Network errors (connection issues)
    /// - Attempt timeouts
    /// - Server errors (500, 502, 503, 504)
    ///
    /// A context deadline or cancellation is final.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NluError::RateLimit { .. }
                | NluError::Network { .. }
                | NluError::Timeout { .. }
                | NluError::Server {
                    status_code: Some(500) | Some(502) | Some(503) | Some(504),
                    ..
                }
        )
    }

    /// Returns the retry-after duration if the service sent one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            NluError::RateLimit { retry_after, .. } | NluError::Server { retry_after, .. } => {
                *retry_after
            }
            _ => None,
        }
    }

    /// Get the HTTP status code if the error came from an HTTP exchange
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NluError::Server { status_code, .. } => *status_code,
            NluError::Api { status, .. } | NluError::Authentication { status, .. } => {
                Some(*status)
            }
            NluError::RateLimit { .. } => Some(429),
            NluError::NotFound { .. } => Some(404),
            NluError::Decode { response, .. } => Some(response.status),
            _ => None,
        }
    }

    /// The envelope of the exchange that produced this error, if one completed.
    pub fn response(&self) -> Option<&TransportResponse> {
        match self {
            NluError::Authentication { response, .. }
            | NluError::RateLimit { response, .. }
            | NluError::Server { response, .. }
            | NluError::NotFound { response, .. }
            | NluError::Api { response, .. }
            | NluError::Decode { response, .. } => Some(response),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NluError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NluError::Timeout {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            NluError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else if err.is_builder() {
            NluError::Internal {
                message: format!("Failed to build request: {}", err),
            }
        } else {
            NluError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for NluError {
    fn from(err: serde_json::Error) -> Self {
        NluError::Internal {
            message: format!("JSON serialization error: {}", err),
        }
    }
}

impl From<url::ParseError> for NluError {
    fn from(err: url::ParseError) -> Self {
        NluError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<std::io::Error> for NluError {
    fn from(err: std::io::Error) -> Self {
        NluError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::HeaderMap;

    fn envelope(status: u16) -> Box<TransportResponse> {
        Box::new(TransportResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        })
    }

    #[test]
    fn test_error_is_retryable() {
        let rate_limit_error = NluError::RateLimit {
            message: "Too many requests".to_string(),
            retry_after: Some(Duration::from_secs(30)),
            response: envelope(429),
        };
        assert!(rate_limit_error.is_retryable());

        let auth_error = NluError::Authentication {
            status: 401,
            message: "Unauthorized".to_string(),
            response: envelope(401),
        };
        assert!(!auth_error.is_retryable());

        let server_error = NluError::Server {
            message: "Service unavailable".to_string(),
            status_code: Some(503),
            retry_after: None,
            response: envelope(503),
        };
        assert!(server_error.is_retryable());

        let not_implemented = NluError::Server {
            message: "Not implemented".to_string(),
            status_code: Some(501),
            retry_after: None,
            response: envelope(501),
        };
        assert!(!not_implemented.is_retryable());

        let validation = NluError::validation(vec![ValidationDetail::required("features")]);
        assert!(!validation.is_retryable());
        assert_eq!(validation.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_attempt_timeout_is_retryable_but_deadline_is_not() {
        let timeout = NluError::Timeout {
            message: "operation timed out".to_string(),
        };
        assert!(timeout.is_retryable());
        assert_eq!(timeout.category(), ErrorCategory::Network);

        let deadline = NluError::DeadlineExceeded {
            message: "context deadline exceeded".to_string(),
        };
        assert!(!deadline.is_retryable());
        assert_eq!(deadline.category(), ErrorCategory::Context);
    }

    #[test]
    fn test_retry_after() {
        let rate_limit = NluError::RateLimit {
            message: "Too many requests".to_string(),
            retry_after: Some(Duration::from_secs(30)),
            response: envelope(429),
        };
        assert_eq!(rate_limit.retry_after(), Some(Duration::from_secs(30)));

        let network_error = NluError::Network {
            message: "Connection failed".to_string(),
        };
        assert_eq!(network_error.retry_after(), None);
    }

    #[test]
    fn test_decode_error_keeps_envelope() {
        let error = NluError::Decode {
            message: "expected value at line 1 column 1".to_string(),
            response: Box::new(TransportResponse {
                status: 200,
                headers: HeaderMap::new(),
                body: Bytes::from_static(b"not json"),
            }),
        };

        assert_eq!(error.status_code(), Some(200));
        assert_eq!(error.category(), ErrorCategory::Decode);
        let envelope = error.response().unwrap();
        assert_eq!(&envelope.body[..], b"not json");
    }

    #[test]
    fn test_http_errors_expose_envelope() {
        let error = NluError::NotFound {
            message: "model not found".to_string(),
            response: envelope(404),
        };
        assert_eq!(error.response().unwrap().status, 404);

        let network = NluError::Network {
            message: "reset".to_string(),
        };
        assert!(network.response().is_none());
    }

    #[test]
    fn test_validation_message_joins_details() {
        let error = NluError::validation(vec![
            ValidationDetail::required("language"),
            ValidationDetail::required("training_data"),
        ]);
        assert_eq!(
            error.to_string(),
            "Validation error: language is required; training_data is required"
        );
    }
}
