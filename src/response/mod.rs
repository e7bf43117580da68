//! Response decoding.

use crate::errors::{NluError, NluResult};
use crate::transport::TransportResponse;
use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

/// Typed result paired with the transport metadata of the exchange.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub raw: Bytes,
    /// Decoded result; `None` when the service sent no body
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// The decoded result, if any.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Consumes the envelope, returning the decoded result.
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// A response header value as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Decode a successful transport response into `T`.
///
/// A zero-length body yields `result: None` without error. A body that is not
/// valid JSON for `T` yields [`NluError::Decode`], which carries the envelope.
pub fn decode<T: DeserializeOwned>(response: TransportResponse) -> NluResult<DetailedResponse<T>> {
    let result = if response.body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<T>(&response.body) {
            Ok(value) => Some(value),
            Err(e) => {
                return Err(NluError::Decode {
                    message: e.to_string(),
                    response: Box::new(response),
                })
            }
        }
    };

    Ok(DetailedResponse {
        status_code: response.status,
        headers: response.headers,
        raw: response.body,
        result,
    })
}
