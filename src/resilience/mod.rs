//! Resilience for the Watson NLU client.
//!
//! Retries are off unless a [`RetryConfig`] is installed on the client. The
//! composed request is sent as is on every attempt; a request carrying a
//! one-shot training data stream is never retried.

mod retry;

pub use retry::{RetryConfig, RetryExecutor};

use crate::context::RequestContext;
use crate::errors::NluResult;
use crate::transport::{HttpTransport, PreparedRequest, TransportResponse};
use tracing::debug;

/// Execute a prepared request with the retry policy and the caller's context.
pub async fn invoke(
    transport: &dyn HttpTransport,
    request: &PreparedRequest,
    retry: Option<&RetryConfig>,
    ctx: &RequestContext,
) -> NluResult<TransportResponse> {
    let config = match retry {
        Some(config) if request.is_replayable() => config.clone(),
        Some(_) => {
            debug!(url = %request.url, "Request body is not replayable, retries disabled");
            RetryConfig::disabled()
        }
        None => RetryConfig::disabled(),
    };

    RetryExecutor::with_config(config)
        .execute(ctx, || transport.send(request))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NluError;
    use crate::mocks::{MockHttpTransport, MockResponse};
    use crate::transport::{FormData, PartData, RequestBody};
    use bytes::Bytes;
    use http::{HeaderMap, Method};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    fn request(body: RequestBody) -> PreparedRequest {
        PreparedRequest {
            method: Method::POST,
            url: "https://nlu.example.com/v1/models/sentiment?version=2022-04-07"
                .parse()
                .unwrap(),
            headers: HeaderMap::new(),
            body,
        }
    }

    fn fast_retry() -> RetryConfig {
        RetryConfig::new()
            .with_max_retries(2)
            .with_initial_delay(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_retries_disabled_by_default() {
        let transport = MockHttpTransport::new()
            .with_response(MockResponse::error(503, "unavailable"))
            .with_response(MockResponse::json(&serde_json::json!({})));

        let result = invoke(
            &transport,
            &request(RequestBody::Empty),
            None,
            &RequestContext::background(),
        )
        .await;

        assert!(matches!(result, Err(NluError::Server { .. })));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_replayable_request_is_resent() {
        let transport = MockHttpTransport::new()
            .with_response(MockResponse::error(503, "unavailable"))
            .with_response(MockResponse::json(&serde_json::json!({"deleted": "abc"})));

        let config = fast_retry();
        let result = invoke(
            &transport,
            &request(RequestBody::Json(Bytes::from_static(b"{}"))),
            Some(&config),
            &RequestContext::background(),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_stream_body_gets_one_attempt() {
        let transport = MockHttpTransport::new()
            .with_response(MockResponse::error(503, "unavailable"))
            .with_response(MockResponse::json(&serde_json::json!({})));

        let stream: crate::transport::ByteStream =
            Box::pin(futures::stream::iter(vec![Ok(Bytes::from_static(b"a,b"))]));
        let form = FormData::new().text("language", "en").file(
            "training_data",
            "training_data",
            "text/csv",
            PartData::Stream(Arc::new(Mutex::new(Some(stream)))),
        );

        let config = fast_retry();
        let result = invoke(
            &transport,
            &request(RequestBody::Multipart(form)),
            Some(&config),
            &RequestContext::background(),
        )
        .await;

        assert!(matches!(result, Err(NluError::Server { .. })));
        assert_eq!(transport.request_count(), 1);
    }
}
