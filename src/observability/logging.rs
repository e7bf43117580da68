//! Structured logging for the Watson NLU client.

use crate::errors::{NluError, NluResult};
use http::HeaderMap;
use std::collections::BTreeMap;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_KEYS: &[&str] = &[
    "apikey",
    "api_key",
    "authorization",
    "cookie",
    "token",
    "secret",
    "password",
    "credential",
];

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - request composition details
    Debug,
    /// Info level - one line per completed call
    Info,
    /// Warn level - failed calls and retries
    Warn,
    /// Error level - errors
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty printed format for development
    Pretty,
    /// JSON format for production
    Json,
    /// Compact format
    Compact,
}

/// Configuration for logging
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
    /// Whether to include target (module path)
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable target
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Create configuration for development
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            include_target: true,
        }
    }

    /// Create configuration for production
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            include_target: false,
        }
    }

    /// Filter honouring `RUST_LOG`, falling back to this crate at `level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "integrations_watson_nlu={}",
                Level::from(self.level).as_str().to_lowercase()
            ))
        })
    }
}

/// Install a global `tracing` subscriber.
///
/// Fails when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> NluResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.include_target);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| NluError::Configuration {
        message: format!("Failed to install log subscriber: {}", e),
    })
}

/// Header names and values safe to log.
///
/// Values of credential-bearing headers are replaced with `[REDACTED]`.
pub fn redact_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            let key = name.as_str().to_lowercase();
            let shown = if value.is_sensitive() || SENSITIVE_KEYS.iter().any(|s| key.contains(s))
            {
                REDACTED.to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (key, shown)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_logging_config() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Debug)
            .with_format(LogFormat::Json);

        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_presets() {
        assert_eq!(LoggingConfig::development().level, LogLevel::Debug);
        assert!(LoggingConfig::development().include_target);
        assert_eq!(LoggingConfig::production().format, LogFormat::Json);
    }

    #[test]
    fn test_redact_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic YXBpa2V5OmtleQ=="));
        headers.insert("x-watson-learning-opt-out", HeaderValue::from_static("true"));
        let mut marked = HeaderValue::from_static("abc");
        marked.set_sensitive(true);
        headers.insert("x-custom", marked);

        let redacted = redact_headers(&headers);

        assert_eq!(redacted["authorization"], "[REDACTED]");
        assert_eq!(redacted["x-custom"], "[REDACTED]");
        assert_eq!(redacted["x-watson-learning-opt-out"], "true");
    }
}
