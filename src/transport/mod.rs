//! HTTP transport layer for the Watson NLU client.
//!
//! The transport only moves a fully composed [`PreparedRequest`] over the
//! wire and maps non-success statuses to typed errors. Retries and per-call
//! cancellation live in [`crate::resilience`].

mod body;
mod http_transport;

pub use body::{ByteStream, FormData, FormPart, PartData, RequestBody};
pub use http_transport::{HttpTransport, ReqwestTransport, TransportConfig};

use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

/// A request as it goes on the wire.
///
/// Composed exactly once per call; retries re-send the same value.
#[derive(Debug)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Fully resolved URL including the query string
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: RequestBody,
}

impl PreparedRequest {
    /// Whether the request can be sent more than once.
    ///
    /// Requests carrying a streamed form part can only be sent a single time.
    pub fn is_replayable(&self) -> bool {
        match &self.body {
            RequestBody::Multipart(form) => form.is_replayable(),
            RequestBody::Empty | RequestBody::Json(_) => true,
        }
    }
}

/// Envelope of one completed HTTP exchange.
///
/// Returned directly for 2xx statuses and attached to the error otherwise.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Bytes,
}
