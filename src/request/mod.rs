//! Request composition.
//!
//! A [`RequestBuilder`] turns one operation's options into exactly one
//! [`PreparedRequest`]. The body mode is chosen by the caller through
//! [`RequestBuilder::json`] or [`RequestBuilder::form`]; the two are never
//! mixed on one request.

use crate::auth::AuthManager;
use crate::config::ServiceSettings;
use crate::errors::{NluError, NluResult, ValidationDetail};
use crate::transport::{FormData, PreparedRequest, RequestBody};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Builder for a single wire request.
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: RequestBody,
    json_body: bool,
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("body", &self.body)
            .finish()
    }
}

impl RequestBuilder {
    /// Start a request against the configured service URL.
    ///
    /// Fails with a validation error when no service URL is set. The
    /// `version` query parameter and the default headers are attached here.
    pub fn new(method: Method, settings: &ServiceSettings) -> NluResult<Self> {
        let mut url = settings.require_service_url()?.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.query_pairs_mut().append_pair("version", &settings.version);

        let mut builder = Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            json_body: false,
        };
        builder.insert_headers(&settings.default_headers)?;
        Ok(builder)
    }

    /// Append static path segments.
    pub fn segments(mut self, segments: &[&str]) -> NluResult<Self> {
        self.push_segments(segments)?;
        Ok(self)
    }

    /// Append a path parameter as a single escaped segment.
    pub fn path_param(mut self, name: &str, value: &str) -> NluResult<Self> {
        if value.is_empty() {
            return Err(NluError::validation(vec![ValidationDetail::empty(name)]));
        }
        self.push_segments(&[value])?;
        Ok(self)
    }

    fn push_segments(&mut self, segments: &[&str]) -> NluResult<()> {
        if self.url.cannot_be_a_base() {
            return Err(NluError::Configuration {
                message: format!("service URL '{}' cannot carry a path", self.url),
            });
        }
        if let Ok(mut path) = self.url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(())
    }

    /// Apply authentication and `User-Agent` headers.
    pub fn auth(mut self, auth_manager: &dyn AuthManager) -> Self {
        auth_manager.add_auth_headers(&mut self.headers);
        self
    }

    /// Apply the caller's per-call header overrides.
    pub fn headers(mut self, headers: &HashMap<String, String>) -> NluResult<Self> {
        self.insert_headers(headers)?;
        Ok(self)
    }

    fn insert_headers(&mut self, headers: &HashMap<String, String>) -> NluResult<()> {
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                NluError::validation(vec![ValidationDetail::with_value(
                    "headers",
                    "invalid header name",
                    name.clone(),
                )])
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                NluError::validation(vec![ValidationDetail::new(
                    "headers",
                    format!("invalid value for header '{}'", name),
                )])
            })?;
            self.headers.insert(header_name, header_value);
        }
        Ok(())
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> NluResult<Self> {
        self.body = RequestBody::Json(Bytes::from(serde_json::to_vec(body)?));
        self.json_body = true;
        Ok(self)
    }

    /// Use `form` as the `multipart/form-data` request body.
    pub fn form(mut self, form: FormData) -> Self {
        self.body = RequestBody::Multipart(form);
        self.json_body = false;
        self
    }

    /// Finish the request.
    pub fn build(mut self) -> PreparedRequest {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if self.json_body {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        PreparedRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}
