//! HTTP transport implementations.

use super::{PreparedRequest, RequestBody, TransportResponse};
use crate::errors::{ApiErrorResponse, NluError, NluResult};
use async_trait::async_trait;
use http::HeaderMap;
use reqwest::Client;
use std::time::Duration;

/// HTTP transport trait for making requests to the Watson NLU service.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one HTTP exchange.
    ///
    /// Returns the envelope for 2xx statuses and a typed error otherwise.
    async fn send(&self, request: &PreparedRequest) -> NluResult<TransportResponse>;
}

/// Settings baked into the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Timeout applied to each attempt
    pub timeout: Duration,
    /// Negotiate gzip-compressed responses
    pub enable_gzip: bool,
    /// Accept invalid TLS certificates
    pub disable_ssl_verification: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            enable_gzip: false,
            disable_ssl_verification: false,
        }
    }
}

/// Reqwest-based HTTP transport implementation
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport
    pub fn new(config: &TransportConfig) -> NluResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .gzip(config.enable_gzip)
            .danger_accept_invalid_certs(config.disable_ssl_verification)
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| NluError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Create a new reqwest transport with custom client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Map a non-2xx exchange to an `NluError` that keeps its envelope
    pub(crate) fn map_http_error(response: TransportResponse) -> NluError {
        let status = response.status;
        let parsed = serde_json::from_slice::<ApiErrorResponse>(&response.body).ok();
        let message = parsed
            .as_ref()
            .and_then(|e| e.message())
            .unwrap_or_else(|| {
                let text = String::from_utf8_lossy(&response.body);
                if text.trim().is_empty() {
                    format!("HTTP {} error", status)
                } else {
                    text.into_owned()
                }
            });
        let retry_after = Self::parse_retry_after(&response.headers);
        let response = Box::new(response);

        match status {
            401 | 403 => NluError::Authentication {
                status,
                message,
                response,
            },
            404 => NluError::NotFound { message, response },
            429 => NluError::RateLimit {
                message,
                retry_after,
                response,
            },
            500..=599 => NluError::Server {
                message,
                status_code: Some(status),
                retry_after,
                response,
            },
            _ => NluError::Api {
                status,
                message,
                code: parsed.as_ref().and_then(|e| e.code()),
                response,
            },
        }
    }

    /// Parse retry-after header from response
    fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
        headers
            .get(http::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> NluResult<TransportResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.body(bytes.clone()),
            RequestBody::Multipart(form) => builder.multipart(form.to_reqwest_form()?),
        };

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let envelope = TransportResponse {
            status,
            headers,
            body,
        };
        if !(200..300).contains(&status) {
            return Err(Self::map_http_error(envelope));
        }

        Ok(envelope)
    }
}
