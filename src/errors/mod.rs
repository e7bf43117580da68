//! Error types for the Watson NLU client.
//!
//! Errors fall into four groups: local validation and configuration problems
//! detected before any network call, HTTP failures reported by the service,
//! transport failures (network, deadline, cancellation) and decode failures of
//! a successful response body.

mod categories;
mod error;

pub use categories::{ApiErrorResponse, ErrorCategory, ValidationDetail};
pub use error::{NluError, NluResult};
