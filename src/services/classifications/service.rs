//! Classifications models service implementation.

use super::types::{
    CreateClassificationsModelOptions, DeleteClassificationsModelOptions, GetClassificationsModelOptions,
    ListClassificationsModelsOptions, ClassificationsModelList, ClassificationsModel,
    UpdateClassificationsModelOptions,
};
use crate::context::RequestContext;
use crate::errors::NluResult;
use crate::response::DetailedResponse;
use crate::services::ServiceCore;
use crate::types::DeleteModelResults;
use async_trait::async_trait;
use http::Method;
use tracing::{info_span, Instrument};

const CLASSIFICATIONS_PATH: &[&str] = &["v1", "models", "classifications"];

/// Classifications models service trait for testability
#[async_trait]
pub trait ClassificationsService: Send + Sync {
    /// Train a custom classifications model
    async fn create_classifications_model(
        &self,
        options: CreateClassificationsModelOptions,
    ) -> NluResult<DetailedResponse<ClassificationsModel>> {
        self.create_classifications_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Train a custom classifications model with an explicit context
    async fn create_classifications_model_with_context(
        &self,
        options: CreateClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModel>>;

    /// List custom classifications models
    async fn list_classifications_models(
        &self,
        options: ListClassificationsModelsOptions,
    ) -> NluResult<DetailedResponse<ClassificationsModelList>> {
        self.list_classifications_models_with_context(options, &RequestContext::background())
            .await
    }

    /// List custom classifications models with an explicit context
    async fn list_classifications_models_with_context(
        &self,
        options: ListClassificationsModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModelList>>;

    /// Get a custom classifications model
    async fn get_classifications_model(
        &self,
        options: GetClassificationsModelOptions,
    ) -> NluResult<DetailedResponse<ClassificationsModel>> {
        self.get_classifications_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Get a custom classifications model with an explicit context
    async fn get_classifications_model_with_context(
        &self,
        options: GetClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModel>>;

    /// Retrain a custom classifications model
    async fn update_classifications_model(
        &self,
        options: UpdateClassificationsModelOptions,
    ) -> NluResult<DetailedResponse<ClassificationsModel>> {
        self.update_classifications_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Retrain a custom classifications model with an explicit context
    async fn update_classifications_model_with_context(
        &self,
        options: UpdateClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModel>>;

    /// Delete a custom classifications model
    async fn delete_classifications_model(
        &self,
        options: DeleteClassificationsModelOptions,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        self.delete_classifications_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Delete a custom classifications model with an explicit context
    async fn delete_classifications_model_with_context(
        &self,
        options: DeleteClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>>;
}

/// Implementation of the Classifications models service
pub struct ClassificationsServiceImpl {
    core: ServiceCore,
}

impl ClassificationsServiceImpl {
    /// Create a new Classifications models service
    pub fn new(core: ServiceCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl ClassificationsService for ClassificationsServiceImpl {
    async fn create_classifications_model_with_context(
        &self,
        options: CreateClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "classifications",
            operation = "create_classifications_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let headers = options.headers.clone();
            let request = self
                .core
                .request(Method::POST, &settings, CLASSIFICATIONS_PATH)?
                .headers(&headers)?
                .form(options.into_form()?)
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn list_classifications_models_with_context(
        &self,
        options: ListClassificationsModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModelList>> {
        let span = info_span!(
            "watson_nlu",
            service = "classifications",
            operation = "list_classifications_models"
        );
        async move {
            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::GET, &settings, CLASSIFICATIONS_PATH)?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn get_classifications_model_with_context(
        &self,
        options: GetClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "classifications",
            operation = "get_classifications_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::GET, &settings, CLASSIFICATIONS_PATH)?
                .path_param("model_id", options.model_id.as_deref().unwrap_or_default())?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn update_classifications_model_with_context(
        &self,
        options: UpdateClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<ClassificationsModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "classifications",
            operation = "update_classifications_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let model_id = options.model_id.clone().unwrap_or_default();
            let headers = options.headers.clone();
            let request = self
                .core
                .request(Method::PUT, &settings, CLASSIFICATIONS_PATH)?
                .path_param("model_id", &model_id)?
                .headers(&headers)?
                .form(options.into_form()?)
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn delete_classifications_model_with_context(
        &self,
        options: DeleteClassificationsModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        let span = info_span!(
            "watson_nlu",
            service = "classifications",
            operation = "delete_classifications_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::DELETE, &settings, CLASSIFICATIONS_PATH)?
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
    use crate::services::classifications::ClassificationsTrainingParameters;
    use crate::types::ModelStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_classifications_model_sends_parameters() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({
                "model_id": "cls1",
                "status": "starting",
                "training_parameters": {"model_type": "single_label"}
            })))
            .build(ClassificationsServiceImpl::new);

        let response = service
            .create_classifications_model(
                CreateClassificationsModelOptions::new("en", r#"[{"text":"hi","labels":["greeting"]}]"#)
                    .user_metadata(json!({"owner": "qa"}))
                    .training_parameters(
                        ClassificationsTrainingParameters::default().model_type("single_label"),
                    ),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/v1/models/classifications");
        assert_eq!(
            request.form_field_names(),
            vec!["language", "training_data", "user_metadata", "training_parameters"]
        );
        assert_eq!(
            request.form_text("training_parameters"),
            Some(r#"{"model_type":"single_label"}"#)
        );

        let model = response.result.unwrap();
        assert_eq!(model.status, Some(ModelStatus::Starting));
        assert_eq!(
            model.training_parameters.unwrap().model_type.as_deref(),
            Some("single_label")
        );
    }

    #[tokio::test]
    async fn test_list_get_update_delete_paths() {
        let (service, transport) = MockClientBuilder::new()
            .with_response(MockResponse::json(&json!({"models": [{"model_id": "cls1"}]})))
            .with_response(MockResponse::json(&json!({"model_id": "cls1", "status": "deploying"})))
            .with_response(MockResponse::json(&json!({"model_id": "cls1", "status": "training"})))
            .with_response(MockResponse::json(&json!({"deleted": "cls1"})))
            .build(ClassificationsServiceImpl::new);

        let listed = service
            .list_classifications_models(ListClassificationsModelsOptions::new())
            .await
            .unwrap();
        assert_eq!(listed.result.unwrap().models.unwrap().len(), 1);

        let fetched = service
            .get_classifications_model(GetClassificationsModelOptions::new("cls1"))
            .await
            .unwrap();
        assert_eq!(fetched.result.unwrap().status, Some(ModelStatus::Deploying));

        service
            .update_classifications_model(UpdateClassificationsModelOptions::new(
                "cls1", "en", "[]",
            ))
            .await
            .unwrap();
        service
            .delete_classifications_model(DeleteClassificationsModelOptions::new("cls1"))
            .await
            .unwrap();

        let requests = transport.get_requests();
        let calls: Vec<(Method, &str)> = requests
            .iter()
            .map(|r| (r.method.clone(), r.url.path()))
            .collect();
        assert_eq!(
            calls,
            vec![
                (Method::GET, "/v1/models/classifications"),
                (Method::GET, "/v1/models/classifications/cls1"),
                (Method::PUT, "/v1/models/classifications/cls1"),
                (Method::DELETE, "/v1/models/classifications/cls1"),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_requires_model_id() {
        let (service, transport) = MockClientBuilder::new().build(ClassificationsServiceImpl::new);

        let result = service
            .delete_classifications_model(DeleteClassificationsModelOptions::default())
            .await;

        assert!(matches!(result, Err(NluError::Validation { .. })));
        assert_eq!(transport.request_count(), 0);
    }
}
