//! Configuration module for the Watson NLU client.
//!
//! [`NluConfig`] is fixed once the client is built. The subset of settings
//! that may change afterwards (service URL, default headers, retry policy)
//! is held in [`ServiceSettings`] and shared by every service of a client.

use crate::auth::{AuthManager, BasicAuthManager, BearerTokenAuthManager, NoAuthManager};
use crate::errors::{NluError, NluResult, ValidationDetail};
use crate::resilience::RetryConfig;
use chrono::NaiveDate;
use parking_lot::RwLock;
use secrecy::SecretString;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default service URL.
pub const DEFAULT_SERVICE_URL: &str =
    "https://api.us-south.natural-language-understanding.watson.cloud.ibm.com";

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS);

const ENV_PREFIX: &str = "NATURAL_LANGUAGE_UNDERSTANDING";

/// Credentials used to authenticate calls.
#[derive(Clone)]
pub enum Authenticator {
    /// IBM Cloud API key, sent as basic credentials `apikey:<key>`
    ApiKey(SecretString),
    /// Caller-managed bearer token
    BearerToken(SecretString),
    /// No authentication (e.g. behind a gateway)
    NoAuth,
}

impl Authenticator {
    /// Build the header-producing manager for these credentials.
    pub fn into_manager(self) -> NluResult<Arc<dyn AuthManager>> {
        Ok(match self {
            Authenticator::ApiKey(key) => Arc::new(BasicAuthManager::new(&key)?),
            Authenticator::BearerToken(token) => Arc::new(BearerTokenAuthManager::new(&token)?),
            Authenticator::NoAuth => Arc::new(NoAuthManager),
        })
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authenticator::ApiKey(_) => write!(f, "ApiKey([REDACTED])"),
            Authenticator::BearerToken(_) => write!(f, "BearerToken([REDACTED])"),
            Authenticator::NoAuth => write!(f, "NoAuth"),
        }
    }
}

/// Configuration for the Watson NLU client.
#[derive(Debug, Clone)]
pub struct NluConfig {
    /// Service endpoint
    pub service_url: Url,
    /// API version date (`YYYY-MM-DD`), sent as the `version` query parameter
    pub version: String,
    /// Credentials
    pub authenticator: Authenticator,
    /// Per-attempt timeout
    pub timeout: Duration,
    /// Retry policy; `None` disables retries
    pub retry: Option<RetryConfig>,
    /// Negotiate gzip-compressed responses
    pub enable_gzip: bool,
    /// Skip TLS certificate verification
    pub disable_ssl_verification: bool,
    /// Headers sent with every call
    pub default_headers: HashMap<String, String>,
}

impl NluConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> NluConfigBuilder {
        NluConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NATURAL_LANGUAGE_UNDERSTANDING_VERSION` (required)
    /// - `NATURAL_LANGUAGE_UNDERSTANDING_URL`
    /// - `NATURAL_LANGUAGE_UNDERSTANDING_AUTH_TYPE`: `iam`, `basic`, `bearertoken` or `noauth`
    /// - `NATURAL_LANGUAGE_UNDERSTANDING_APIKEY`
    /// - `NATURAL_LANGUAGE_UNDERSTANDING_BEARER_TOKEN`
    /// - `NATURAL_LANGUAGE_UNDERSTANDING_DISABLE_SSL`
    /// - `NATURAL_LANGUAGE_UNDERSTANDING_TIMEOUT` (seconds)
    pub fn from_env() -> NluResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> NluResult<Self> {
        let var = |suffix: &str| lookup(&format!("{}_{}", ENV_PREFIX, suffix));

        let version = var("VERSION").ok_or_else(|| NluError::Configuration {
            message: format!("{}_VERSION environment variable not set", ENV_PREFIX),
        })?;

        let mut builder = NluConfigBuilder::new().version(version);

        if let Some(url) = var("URL") {
            builder = builder.service_url(url);
        }

        let auth_type = var("AUTH_TYPE").map(|t| t.to_ascii_lowercase());
        builder = match auth_type.as_deref() {
            Some("noauth") => builder.no_auth(),
            Some("bearertoken") => {
                let token = var("BEARER_TOKEN").ok_or_else(|| NluError::Configuration {
                    message: format!("{}_BEARER_TOKEN environment variable not set", ENV_PREFIX),
                })?;
                builder.bearer_token(token)
            }
            Some("iam") | Some("basic") | None => {
                let key = var("APIKEY").ok_or_else(|| NluError::Configuration {
                    message: format!("{}_APIKEY environment variable not set", ENV_PREFIX),
                })?;
                builder.api_key(key)
            }
            Some(other) => {
                return Err(NluError::Configuration {
                    message: format!("unsupported authentication type '{}'", other),
                })
            }
        };

        if let Some(flag) = var("DISABLE_SSL") {
            builder = builder.disable_ssl_verification(flag.eq_ignore_ascii_case("true"));
        }

        if let Some(timeout_str) = var("TIMEOUT") {
            let timeout_secs =
                timeout_str
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| NluError::Configuration {
                        message: format!(
                            "{}_TIMEOUT must be a whole number of seconds, got '{}'",
                            ENV_PREFIX, timeout_str
                        ),
                    })?;
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        builder.build()
    }

    /// The mutable subset of this configuration.
    pub fn settings(&self) -> ServiceSettings {
        ServiceSettings {
            service_url: Some(self.service_url.clone()),
            version: self.version.clone(),
            default_headers: self.default_headers.clone(),
            retry: self.retry.clone(),
        }
    }
}

/// Builder for `NluConfig`.
#[derive(Default)]
pub struct NluConfigBuilder {
    service_url: Option<String>,
    version: Option<String>,
    authenticator: Option<Authenticator>,
    timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    enable_gzip: bool,
    disable_ssl_verification: bool,
    default_headers: HashMap<String, String>,
}

impl NluConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service URL.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Sets the API version date.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Authenticates with an IBM Cloud API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.authenticator = Some(Authenticator::ApiKey(SecretString::new(api_key.into())));
        self
    }

    /// Authenticates with a bearer token.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.authenticator = Some(Authenticator::BearerToken(SecretString::new(token.into())));
        self
    }

    /// Sends no credentials.
    pub fn no_auth(mut self) -> Self {
        self.authenticator = Some(Authenticator::NoAuth);
        self
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables retries with the given policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Negotiates gzip-compressed responses.
    pub fn enable_gzip(mut self, enable: bool) -> Self {
        self.enable_gzip = enable;
        self
    }

    /// Skips TLS certificate verification.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Adds a header sent with every call.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> NluResult<NluConfig> {
        let version = self.version.ok_or_else(|| NluError::Configuration {
            message: "version is required".to_string(),
        })?;
        validate_version(&version)?;

        let authenticator = self.authenticator.ok_or_else(|| NluError::Configuration {
            message: "an authenticator is required".to_string(),
        })?;

        let service_url = parse_service_url(
            self.service_url
                .as_deref()
                .unwrap_or(DEFAULT_SERVICE_URL),
        )?;

        Ok(NluConfig {
            service_url,
            version,
            authenticator,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry: self.retry,
            enable_gzip: self.enable_gzip,
            disable_ssl_verification: self.disable_ssl_verification,
            default_headers: self.default_headers,
        })
    }
}

/// Checks that `version` is a calendar date in `YYYY-MM-DD` form.
pub fn validate_version(version: &str) -> NluResult<()> {
    NaiveDate::parse_from_str(version, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| NluError::Configuration {
            message: format!("version must be a YYYY-MM-DD date, got '{}'", version),
        })
}

/// Parses a service URL, rejecting anything that is not http(s).
pub fn parse_service_url(url: &str) -> NluResult<Url> {
    let parsed = Url::parse(url.trim_end_matches('/'))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(NluError::Configuration {
            message: "service URL must start with http:// or https://".to_string(),
        }),
    }
}

/// Service-wide settings read at the start of every call.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Service endpoint; calls fail validation while unset
    pub service_url: Option<Url>,
    /// API version date
    pub version: String,
    /// Headers sent with every call
    pub default_headers: HashMap<String, String>,
    /// Retry policy; `None` disables retries
    pub retry: Option<RetryConfig>,
}

impl ServiceSettings {
    /// Settings with the given version and nothing else configured.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            service_url: None,
            version: version.into(),
            default_headers: HashMap::new(),
            retry: None,
        }
    }

    /// Sets the service URL.
    pub fn with_service_url(mut self, url: Url) -> Self {
        self.service_url = Some(url);
        self
    }

    /// The service URL, or a validation error when it has not been set.
    pub fn require_service_url(&self) -> NluResult<&Url> {
        self.service_url
            .as_ref()
            .ok_or_else(|| NluError::validation(vec![ValidationDetail::required("service URL")]))
    }
}

/// Settings shared by the services of one client.
pub type SharedSettings = Arc<RwLock<ServiceSettings>>;
