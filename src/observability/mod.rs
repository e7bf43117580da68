//! Observability for the Watson NLU client.
//!
//! Calls emit `tracing` events inside a `watson_nlu` span; this module
//! installs a subscriber and keeps credentials out of the output.

mod logging;

pub use logging::{init_logging, redact_headers, LogFormat, LogLevel, LoggingConfig};
