//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] records every request it receives, draining
//! streamed form parts so tests can inspect the exact wire content, and
//! replays queued [`MockResponse`]s in order. [`MockClientBuilder`] wires a
//! service over the mock transport with fixed settings.

use crate::auth::AuthManager;
use crate::config::{ServiceSettings, SharedSettings};
use crate::errors::{NluError, NluResult};
use crate::resilience::RetryConfig;
use crate::services::ServiceCore;
use crate::transport::{
    HttpTransport, PartData, PreparedRequest, ReqwestTransport, RequestBody, TransportResponse,
};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::TryStreamExt;
use http::header::{HeaderName, HeaderValue, AUTHORIZATION};
use http::{HeaderMap, Method};
use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Service URL used by [`MockClientBuilder`].
pub const MOCK_SERVICE_URL: &str = "https://nlu.example.com";

/// Version date used by [`MockClientBuilder`].
pub const MOCK_VERSION: &str = "2022-04-07";

/// A queued mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
    /// Response headers
    pub headers: HeaderMap,
    /// Wait before answering
    pub delay: Option<Duration>,
    /// Fail the exchange with this error instead of answering
    pub failure: Option<NluError>,
}

impl MockResponse {
    /// A 200 response carrying `data` as JSON.
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        Self::raw(200, serde_json::to_vec(data).unwrap_or_default())
    }

    /// An error response in the service's error body shape.
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message, "code": status });
        Self::raw(status, serde_json::to_vec(&body).unwrap_or_default())
    }

    /// A response with an empty body.
    pub fn empty(status: u16) -> Self {
        Self::raw(status, Vec::new())
    }

    /// A response with an arbitrary body.
    pub fn raw(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: HeaderMap::new(),
            delay: None,
            failure: None,
        }
    }

    /// A transport-level failure (nothing received).
    pub fn failure(error: NluError) -> Self {
        Self {
            failure: Some(error),
            ..Self::empty(0)
        }
    }

    /// Adds a response header.
    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.insert(HeaderName::from_static(name), value);
        }
        self
    }

    /// Delays the answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// One recorded form part.
#[derive(Debug, Clone)]
pub struct MockFormPart {
    /// Field name
    pub name: String,
    /// Advertised file name
    pub filename: Option<String>,
    /// Part content type
    pub content_type: Option<String>,
    /// Part payload as sent
    pub value: Bytes,
}

/// Body of a recorded request.
#[derive(Debug, Clone)]
pub enum MockBody {
    /// No body
    Empty,
    /// JSON document
    Json(Bytes),
    /// Multipart form
    Multipart(Vec<MockFormPart>),
}

/// A recorded request.
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// HTTP method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: MockBody,
}

impl MockRequest {
    /// Value of a query parameter.
    pub fn query(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Value of a header, if it is valid text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The JSON body, if any.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        match &self.body {
            MockBody::Json(bytes) => serde_json::from_slice(bytes).ok(),
            _ => None,
        }
    }

    /// Form field names in wire order.
    pub fn form_field_names(&self) -> Vec<&str> {
        self.form_parts().iter().map(|p| p.name.as_str()).collect()
    }

    /// A form part by name.
    pub fn form_part(&self, name: &str) -> Option<&MockFormPart> {
        self.form_parts().iter().find(|p| p.name == name)
    }

    /// A form part's payload as text.
    pub fn form_text(&self, name: &str) -> Option<&str> {
        self.form_part(name)
            .and_then(|p| std::str::from_utf8(&p.value).ok())
    }

    fn form_parts(&self) -> &[MockFormPart] {
        match &self.body {
            MockBody::Multipart(parts) => parts,
            _ => &[],
        }
    }
}

/// Mock HTTP transport for testing
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<MockRequest>>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response (builder style)
    pub fn with_response(self, response: MockResponse) -> Self {
        self.add_response(response);
        self
    }

    /// Queue a response
    pub fn add_response(&self, response: MockResponse) {
        self.responses.lock().push_back(response);
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Get recorded requests
    pub fn get_requests(&self) -> Vec<MockRequest> {
        self.requests.lock().clone()
    }

    /// Get the last request
    pub fn last_request(&self) -> Option<MockRequest> {
        self.requests.lock().last().cloned()
    }

    async fn record(request: &PreparedRequest) -> NluResult<MockRequest> {
        let body = match &request.body {
            RequestBody::Empty => MockBody::Empty,
            RequestBody::Json(bytes) => MockBody::Json(bytes.clone()),
            RequestBody::Multipart(form) => {
                let mut parts = Vec::with_capacity(form.parts().len());
                for part in form.parts() {
                    let value = match &part.data {
                        PartData::Text(text) => Bytes::from(text.clone()),
                        PartData::Bytes(bytes) => bytes.clone(),
                        PartData::Stream(_) => {
                            let stream = part.take_stream().ok_or_else(|| NluError::Internal {
                                message: format!(
                                    "form field '{}' stream was already consumed",
                                    part.name
                                ),
                            })?;
                            let chunks: Vec<Bytes> =
                                stream.try_collect().await.map_err(|e| NluError::Network {
                                    message: e.to_string(),
                                })?;
                            let mut buffer = BytesMut::new();
                            for chunk in chunks {
                                buffer.extend_from_slice(&chunk);
                            }
                            buffer.freeze()
                        }
                    };
                    parts.push(MockFormPart {
                        name: part.name.clone(),
                        filename: part.filename.clone(),
                        content_type: part.content_type.clone(),
                        value,
                    });
                }
                MockBody::Multipart(parts)
            }
        };

        Ok(MockRequest {
            method: request.method.clone(),
            url: request.url.clone(),
            headers: request.headers.clone(),
            body,
        })
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: &PreparedRequest) -> NluResult<TransportResponse> {
        let recorded = Self::record(request).await?;
        self.requests.lock().push(recorded);

        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| MockResponse::error(500, "No mock response configured"));

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = response.failure {
            return Err(error);
        }
        let envelope = TransportResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
        };
        if !(200..300).contains(&envelope.status) {
            return Err(ReqwestTransport::map_http_error(envelope));
        }

        Ok(envelope)
    }
}

/// Mock auth manager
pub struct MockAuthManager {
    headers: HeaderMap,
}

impl MockAuthManager {
    /// Create a new mock auth manager
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer mock-token"));
        Self { headers }
    }
}

impl Default for MockAuthManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthManager for MockAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
    }

    fn scheme(&self) -> &'static str {
        "mock"
    }
}

/// Builder for services over a [`MockHttpTransport`]
pub struct MockClientBuilder {
    transport: Arc<MockHttpTransport>,
    auth: Arc<MockAuthManager>,
    settings: ServiceSettings,
}

impl MockClientBuilder {
    /// Builder with [`MOCK_SERVICE_URL`] and [`MOCK_VERSION`]
    pub fn new() -> Self {
        let mut settings = ServiceSettings::new(MOCK_VERSION);
        if let Ok(url) = Url::parse(MOCK_SERVICE_URL) {
            settings = settings.with_service_url(url);
        }
        Self {
            transport: Arc::new(MockHttpTransport::new()),
            auth: Arc::new(MockAuthManager::new()),
            settings,
        }
    }

    /// Queue a mock response
    pub fn with_response(self, response: MockResponse) -> Self {
        self.transport.add_response(response);
        self
    }

    /// Enable retries
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.settings.retry = Some(retry);
        self
    }

    /// Replace the service settings
    pub fn with_settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the transport for adding more responses
    pub fn transport(&self) -> Arc<MockHttpTransport> {
        self.transport.clone()
    }

    /// Build a service; returns it with the transport for inspection
    pub fn build<S, F>(self, factory: F) -> (S, Arc<MockHttpTransport>)
    where
        F: FnOnce(ServiceCore) -> S,
    {
        let transport = self.transport.clone();
        let settings: SharedSettings = Arc::new(RwLock::new(self.settings));
        let core = ServiceCore::new(
            self.transport as Arc<dyn HttpTransport>,
            self.auth as Arc<dyn AuthManager>,
            settings,
        );
        (factory(core), transport)
    }
}

impl Default for MockClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
