//! Analyze service implementation.

use super::results::AnalysisResults;
use super::types::AnalyzeOptions;
use crate::context::RequestContext;
use crate::errors::NluResult;
use crate::response::DetailedResponse;
use crate::services::ServiceCore;
use async_trait::async_trait;
use http::Method;
use tracing::{info_span, Instrument};

/// Analyze service trait for testability
#[async_trait]
pub trait AnalyzeService: Send + Sync {
    /// Analyze text, HTML or a public web page
    async fn analyze(
        &self,
        options: AnalyzeOptions,
    ) -> NluResult<DetailedResponse<AnalysisResults>> {
        self.analyze_with_context(options, &RequestContext::background())
            .await
    }

    /// Analyze with an explicit cancellation and deadline signal
    async fn analyze_with_context(
        &self,
        options: AnalyzeOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<AnalysisResults>>;
}

/// Implementation of the Analyze service
pub struct AnalyzeServiceImpl {
    core: ServiceCore,
}

impl AnalyzeServiceImpl {
    /// Create a new Analyze service
    pub fn new(core: ServiceCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl AnalyzeService for AnalyzeServiceImpl {
    async fn analyze_with_context(
        &self,
        options: AnalyzeOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<AnalysisResults>> {
        let span = info_span!("watson_nlu", service = "analyze", operation = "analyze");
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::POST, &settings, &["v1", "analyze"])?
                .headers(&options.headers)?
                .json(&options)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NluError;
    use crate::mocks::{MockClientBuilder, MockResponse};
    use crate::services::analyze::{EntitiesOptions, Features, KeywordsOptions};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_analyze_entities_request() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({
                "language": "en",
                "entities": [{"type": "Company", "text": "IBM Watson", "relevance": 0.98}]
            })))
            .build(AnalyzeServiceImpl::new);

        let response = service
            .analyze(
                AnalyzeOptions::new(Features::new().entities(EntitiesOptions::default()))
                    .text("IBM Watson"),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/v1/analyze");
        assert_eq!(request.query("version").as_deref(), Some("2022-04-07"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(
            request.json_body().unwrap(),
            json!({"features": {"entities": {}}, "text": "IBM Watson"})
        );

        let results = response.result.unwrap();
        assert_eq!(results.entities.unwrap()[0].text.as_deref(), Some("IBM Watson"));
        assert!(results.keywords.is_none());
    }

    #[tokio::test]
    async fn test_missing_features_sends_nothing() {
        let (service, transport) = MockClientBuilder::new().build(AnalyzeServiceImpl::new);

        let result = service
            .analyze(AnalyzeOptions::default().text("hello"))
            .await;

        assert!(matches!(result, Err(NluError::Validation { .. })));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_per_call_headers_do_not_leak() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({})))
            .with_response(MockResponse::json(&json!({})))
            .build(AnalyzeServiceImpl::new);

        let features = Features::new().keywords(KeywordsOptions::default().limit(3));
        service
            .analyze(
                AnalyzeOptions::new(features.clone())
                    .text("one")
                    .header("X-Watson-Learning-Opt-Out", "true"),
            )
            .await
            .unwrap();
        service
            .analyze(AnalyzeOptions::new(features).text("two"))
            .await
            .unwrap();

        let requests = transport.get_requests();
        assert_eq!(requests[0].header("x-watson-learning-opt-out"), Some("true"));
        assert_eq!(requests[1].header("x-watson-learning-opt-out"), None);
    }
}
