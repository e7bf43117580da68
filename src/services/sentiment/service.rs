//! Sentiment models service implementation.

use super::types::{
    CreateSentimentModelOptions, DeleteSentimentModelOptions, GetSentimentModelOptions,
    ListSentimentModelsOptions, ListSentimentModelsResponse, SentimentModel,
    UpdateSentimentModelOptions,
};
use crate::context::RequestContext;
use crate::errors::NluResult;
use crate::response::DetailedResponse;
use crate::services::ServiceCore;
use crate::types::DeleteModelResults;
use async_trait::async_trait;
use http::Method;
use tracing::{info_span, Instrument};

const SENTIMENT_PATH: &[&str] = &["v1", "models", "sentiment"];

/// Sentiment models service trait for testability
#[async_trait]
pub trait SentimentService: Send + Sync {
    /// Train a custom sentiment model
    async fn create_sentiment_model(
        &self,
        options: CreateSentimentModelOptions,
    ) -> NluResult<DetailedResponse<SentimentModel>> {
        self.create_sentiment_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Train a custom sentiment model with an explicit context
    async fn create_sentiment_model_with_context(
        &self,
        options: CreateSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<SentimentModel>>;

    /// List custom sentiment models
    async fn list_sentiment_models(
        &self,
        options: ListSentimentModelsOptions,
    ) -> NluResult<DetailedResponse<ListSentimentModelsResponse>> {
        self.list_sentiment_models_with_context(options, &RequestContext::background())
            .await
    }

    /// List custom sentiment models with an explicit context
    async fn list_sentiment_models_with_context(
        &self,
        options: ListSentimentModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ListSentimentModelsResponse>>;

    /// Get a custom sentiment model
    async fn get_sentiment_model(
        &self,
        options: GetSentimentModelOptions,
    ) -> NluResult<DetailedResponse<SentimentModel>> {
        self.get_sentiment_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Get a custom sentiment model with an explicit context
    async fn get_sentiment_model_with_context(
        &self,
        options: GetSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<SentimentModel>>;

    /// Retrain a custom sentiment model
    async fn update_sentiment_model(
        &self,
        options: UpdateSentimentModelOptions,
    ) -> NluResult<DetailedResponse<SentimentModel>> {
        self.update_sentiment_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Retrain a custom sentiment model with an explicit context
    async fn update_sentiment_model_with_context(
        &self,
        options: UpdateSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<SentimentModel>>;

    /// Delete a custom sentiment model
    async fn delete_sentiment_model(
        &self,
        options: DeleteSentimentModelOptions,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        self.delete_sentiment_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Delete a custom sentiment model with an explicit context
    async fn delete_sentiment_model_with_context(
        &self,
        options: DeleteSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>>;
}

/// Implementation of the Sentiment models service
pub struct SentimentServiceImpl {
    core: ServiceCore,
}

impl SentimentServiceImpl {
    /// Create a new Sentiment models service
    pub fn new(core: ServiceCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl SentimentService for SentimentServiceImpl {
    async fn create_sentiment_model_with_context(
        &self,
        options: CreateSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<SentimentModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "sentiment",
            operation = "create_sentiment_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let headers = options.headers.clone();
            let request = self
                .core
                .request(Method::POST, &settings, SENTIMENT_PATH)?
                .headers(&headers)?
                .form(options.into_form()?)
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn list_sentiment_models_with_context(
        &self,
        options: ListSentimentModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ListSentimentModelsResponse>> {
        let span = info_span!(
            "watson_nlu",
            service = "sentiment",
            operation = "list_sentiment_models"
        );
        async move {
            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::GET, &settings, SENTIMENT_PATH)?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn get_sentiment_model_with_context(
        &self,
        options: GetSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<SentimentModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "sentiment",
            operation = "get_sentiment_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::GET, &settings, SENTIMENT_PATH)?
                .path_param("model_id", options.model_id.as_deref().unwrap_or_default())?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn update_sentiment_model_with_context(
        &self,
        options: UpdateSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<SentimentModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "sentiment",
            operation = "update_sentiment_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let model_id = options.model_id.clone().unwrap_or_default();
            let headers = options.headers.clone();
            let request = self
                .core
                .request(Method::PUT, &settings, SENTIMENT_PATH)?
                .path_param("model_id", &model_id)?
                .headers(&headers)?
                .form(options.into_form()?)
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn delete_sentiment_model_with_context(
        &self,
        options: DeleteSentimentModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        let span = info_span!(
            "watson_nlu",
            service = "sentiment",
            operation = "delete_sentiment_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::DELETE, &settings, SENTIMENT_PATH)?
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
    use crate::types::ModelStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_sentiment_model() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({
                "model_id": "abc",
                "status": "available"
            })))
            .build(SentimentServiceImpl::new);

        let response = service
            .get_sentiment_model(GetSentimentModelOptions::new("abc"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.path(), "/v1/models/sentiment/abc");

        let model = response.result.unwrap();
        assert_eq!(model.model_id.as_deref(), Some("abc"));
        assert_eq!(model.status, Some(ModelStatus::Available));
        assert!(model.notices.is_none());
        assert!(model.created.is_none());
        assert!(model.user_metadata.is_none());
    }

    #[tokio::test]
    async fn test_create_sentiment_model_form() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({"model_id": "new", "status": "starting"})))
            .build(SentimentServiceImpl::new);

        service
            .create_sentiment_model(
                CreateSentimentModelOptions::new("en", "label,text\npositive,great")
                    .name("reviews")
                    .description(""),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/v1/models/sentiment");
        assert!(request.header("content-type").is_none());
        assert_eq!(
            request.form_field_names(),
            vec!["language", "training_data", "name", "description"]
        );
        let part = request.form_part("training_data").unwrap();
        assert_eq!(part.content_type.as_deref(), Some("text/csv"));
        assert_eq!(&part.value[..], b"label,text\npositive,great");
        assert_eq!(request.form_text("description"), Some(""));
    }

    #[tokio::test]
    async fn test_update_sentiment_model() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({"model_id": "abc", "status": "training"})))
            .build(SentimentServiceImpl::new);

        service
            .update_sentiment_model(UpdateSentimentModelOptions::new("abc", "en", "label,text"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url.path(), "/v1/models/sentiment/abc");
        assert_eq!(request.form_field_names(), vec!["language", "training_data"]);
    }

    #[tokio::test]
    async fn test_missing_required_fields_send_nothing() {
        let (service, transport) = MockClientBuilder::new().build(SentimentServiceImpl::new);

        let create = service
            .create_sentiment_model(CreateSentimentModelOptions::default().language("en"))
            .await;
        let update = service
            .update_sentiment_model(UpdateSentimentModelOptions::new("", "en", "a,b"))
            .await;
        let get = service
            .get_sentiment_model(GetSentimentModelOptions::default())
            .await;

        assert!(matches!(create, Err(NluError::Validation { .. })));
        assert!(matches!(update, Err(NluError::Validation { .. })));
        assert!(matches!(get, Err(NluError::Validation { .. })));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({"models": []})))
            .with_response(MockResponse::json(&json!({"deleted": "abc"})))
            .build(SentimentServiceImpl::new);

        let listed = service
            .list_sentiment_models(ListSentimentModelsOptions::new())
            .await
            .unwrap();
        assert_eq!(listed.result.unwrap().models, Some(vec![]));

        let deleted = service
            .delete_sentiment_model(DeleteSentimentModelOptions::new("abc"))
            .await
            .unwrap();
        assert_eq!(deleted.result.unwrap().deleted.as_deref(), Some("abc"));

        let requests = transport.get_requests();
        assert_eq!(requests[0].url.path(), "/v1/models/sentiment");
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(requests[1].url.path(), "/v1/models/sentiment/abc");
    }
}
