//! Authentication for the Watson NLU service.
//!
//! Token acquisition is not performed here. An API key is sent as HTTP basic
//! credentials with the fixed user name `apikey`; a bearer token is sent as
//! supplied by the caller.

use crate::errors::{NluError, NluResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Trait for managing authentication headers
pub trait AuthManager: Send + Sync {
    /// Get the authentication headers for a request
    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.add_auth_headers(&mut headers);
        headers
    }

    /// Add authentication headers to an existing header map
    fn add_auth_headers(&self, headers: &mut HeaderMap);

    /// Name of the authentication scheme, for logs
    fn scheme(&self) -> &'static str;
}

fn user_agent() -> HeaderValue {
    HeaderValue::from_static(concat!("integrations-watson-nlu/", env!("CARGO_PKG_VERSION")))
}

fn sensitive_value(value: String) -> NluResult<HeaderValue> {
    let mut value = HeaderValue::try_from(value).map_err(|_| NluError::Configuration {
        message: "credential contains characters not allowed in an HTTP header".to_string(),
    })?;
    value.set_sensitive(true);
    Ok(value)
}

fn require_non_empty(secret: &SecretString, what: &str) -> NluResult<()> {
    let value = secret.expose_secret();
    if value.trim().is_empty() {
        return Err(NluError::Configuration {
            message: format!("{} cannot be empty", what),
        });
    }
    if value.starts_with('{') || value.starts_with('"') {
        return Err(NluError::Configuration {
            message: format!("{} must not be wrapped in braces or quotes", what),
        });
    }
    Ok(())
}

/// API key authentication sent as HTTP basic credentials `apikey:<key>`
pub struct BasicAuthManager {
    authorization: HeaderValue,
}

impl BasicAuthManager {
    /// Create a new API key authentication manager
    pub fn new(api_key: &SecretString) -> NluResult<Self> {
        require_non_empty(api_key, "API key")?;
        let encoded = STANDARD.encode(format!("apikey:{}", api_key.expose_secret()));
        Ok(Self {
            authorization: sensitive_value(format!("Basic {}", encoded))?,
        })
    }
}

impl AuthManager for BasicAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(USER_AGENT, user_agent());
    }

    fn scheme(&self) -> &'static str {
        "basic"
    }
}

/// Caller-supplied bearer token authentication
pub struct BearerTokenAuthManager {
    authorization: HeaderValue,
}

impl BearerTokenAuthManager {
    /// Create a new bearer token authentication manager
    pub fn new(token: &SecretString) -> NluResult<Self> {
        require_non_empty(token, "Bearer token")?;
        Ok(Self {
            authorization: sensitive_value(format!("Bearer {}", token.expose_secret()))?,
        })
    }
}

impl AuthManager for BearerTokenAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(USER_AGENT, user_agent());
    }

    fn scheme(&self) -> &'static str {
        "bearer"
    }
}

/// No credentials; only the `User-Agent` is set.
#[derive(Debug, Default)]
pub struct NoAuthManager;

impl AuthManager for NoAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        headers.insert(USER_AGENT, user_agent());
    }

    fn scheme(&self) -> &'static str {
        "noauth"
    }
}
