//! Models service implementation.

use super::types::{DeleteModelOptions, ListModelsOptions, ListModelsResults};
use crate::context::RequestContext;
use crate::errors::NluResult;
use crate::response::DetailedResponse;
use crate::services::ServiceCore;
use crate::types::DeleteModelResults;
use async_trait::async_trait;
use http::Method;
use tracing::{info_span, Instrument};

/// Models service trait for testability
#[async_trait]
pub trait ModelsService: Send + Sync {
    /// List custom models of every kind
    async fn list_models(
        &self,
        options: ListModelsOptions,
    ) -> NluResult<DetailedResponse<ListModelsResults>> {
        self.list_models_with_context(options, &RequestContext::background())
            .await
    }

    /// List custom models with an explicit context
    async fn list_models_with_context(
        &self,
        options: ListModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ListModelsResults>>;

    /// Delete a custom model of any kind
    async fn delete_model(
        &self,
        options: DeleteModelOptions,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        self.delete_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Delete a custom model with an explicit context
    async fn delete_model_with_context(
        &self,
        options: DeleteModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>>;
}

/// Implementation of the Models service
pub struct ModelsServiceImpl {
    core: ServiceCore,
}

impl ModelsServiceImpl {
    /// Create a new Models service
    pub fn new(core: ServiceCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl ModelsService for ModelsServiceImpl {
    async fn list_models_with_context(
        &self,
        options: ListModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ListModelsResults>> {
        let span = info_span!("watson_nlu", service = "models", operation = "list_models");
        async move {
            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::GET, &settings, &["v1", "models"])?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn delete_model_with_context(
        &self,
        options: DeleteModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        let span = info_span!("watson_nlu", service = "models", operation = "delete_model");
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::DELETE, &settings, &["v1", "models"])?
                .path_param("model_id", options.model_id.as_deref().unwrap_or_default())?
                .headers(&options.headers)?
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
    use crate::types::{ModelStatus, Timestamp};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_models() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({
                "models": [{
                    "model_id": "m1",
                    "status": "available",
                    "language": "en",
                    "created": "2024-01-02T03:04:05Z"
                }]
            })))
            .build(ModelsServiceImpl::new);

        let response = service.list_models(ListModelsOptions::new()).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.path(), "/v1/models");
        assert!(request.header("content-type").is_none());

        let models = response.result.unwrap().models.unwrap();
        assert_eq!(models[0].status, Some(ModelStatus::Available));
        assert!(matches!(models[0].created, Some(Timestamp::Valid(_))));
        assert!(models[0].description.is_none());
    }

    #[tokio::test]
    async fn test_delete_model() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({"deleted": "m1"})))
            .build(ModelsServiceImpl::new);

        let response = service
            .delete_model(DeleteModelOptions::new("m1"))
            .await
            .unwrap();

        assert_eq!(transport.last_request().unwrap().url.path(), "/v1/models/m1");
        assert_eq!(response.result.unwrap().deleted.as_deref(), Some("m1"));
    }

    #[tokio::test]
    async fn test_delete_model_empty_id_sends_nothing() {
        let (service, transport) = MockClientBuilder::new().build(ModelsServiceImpl::new);

        let empty = service.delete_model(DeleteModelOptions::new("")).await;
        let unset = service.delete_model(DeleteModelOptions::default()).await;

        assert!(matches!(empty, Err(NluError::Validation { .. })));
        assert!(matches!(unset, Err(NluError::Validation { .. })));
        assert_eq!(transport.request_count(), 0);
    }
}
