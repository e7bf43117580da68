//! Categories models service implementation.

use super::types::{
    CategoriesModel, CategoriesModelList, CreateCategoriesModelOptions,
    DeleteCategoriesModelOptions, GetCategoriesModelOptions, ListCategoriesModelsOptions,
    UpdateCategoriesModelOptions,
};
use crate::context::RequestContext;
use crate::errors::NluResult;
use crate::response::DetailedResponse;
use crate::services::ServiceCore;
use crate::types::DeleteModelResults;
use async_trait::async_trait;
use http::Method;
use tracing::{info_span, Instrument};

const CATEGORIES_PATH: &[&str] = &["v1", "models", "categories"];

/// Categories models service trait for testability
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Train a custom categories model
    async fn create_categories_model(
        &self,
        options: CreateCategoriesModelOptions,
    ) -> NluResult<DetailedResponse<CategoriesModel>> {
        self.create_categories_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Train a custom categories model with an explicit context
    async fn create_categories_model_with_context(
        &self,
        options: CreateCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModel>>;

    /// List custom categories models
    async fn list_categories_models(
        &self,
        options: ListCategoriesModelsOptions,
    ) -> NluResult<DetailedResponse<CategoriesModelList>> {
        self.list_categories_models_with_context(options, &RequestContext::background())
            .await
    }

    /// List custom categories models with an explicit context
    async fn list_categories_models_with_context(
        &self,
        options: ListCategoriesModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModelList>>;

    /// Get a custom categories model
    async fn get_categories_model(
        &self,
        options: GetCategoriesModelOptions,
    ) -> NluResult<DetailedResponse<CategoriesModel>> {
        self.get_categories_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Get a custom categories model with an explicit context
    async fn get_categories_model_with_context(
        &self,
        options: GetCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModel>>;

    /// Retrain a custom categories model
    async fn update_categories_model(
        &self,
        options: UpdateCategoriesModelOptions,
    ) -> NluResult<DetailedResponse<CategoriesModel>> {
        self.update_categories_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Retrain a custom categories model with an explicit context
    async fn update_categories_model_with_context(
        &self,
        options: UpdateCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModel>>;

    /// Delete a custom categories model
    async fn delete_categories_model(
        &self,
        options: DeleteCategoriesModelOptions,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        self.delete_categories_model_with_context(options, &RequestContext::background())
            .await
    }

    /// Delete a custom categories model with an explicit context
    async fn delete_categories_model_with_context(
        &self,
        options: DeleteCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>>;
}

/// Implementation of the Categories models service
pub struct CategoriesServiceImpl {
    core: ServiceCore,
}

impl CategoriesServiceImpl {
    /// Create a new Categories models service
    pub fn new(core: ServiceCore) -> Self {
        Self { core }
    }
}

#[async_trait]
impl CategoriesService for CategoriesServiceImpl {
    async fn create_categories_model_with_context(
        &self,
        options: CreateCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "categories",
            operation = "create_categories_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let headers = options.headers.clone();
            let request = self
                .core
                .request(Method::POST, &settings, CATEGORIES_PATH)?
                .headers(&headers)?
                .form(options.into_form()?)
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn list_categories_models_with_context(
        &self,
        options: ListCategoriesModelsOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModelList>> {
        let span = info_span!(
            "watson_nlu",
            service = "categories",
            operation = "list_categories_models"
        );
        async move {
            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::GET, &settings, CATEGORIES_PATH)?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn get_categories_model_with_context(
        &self,
        options: GetCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "categories",
            operation = "get_categories_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::GET, &settings, CATEGORIES_PATH)?
                .path_param("model_id", options.model_id.as_deref().unwrap_or_default())?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn update_categories_model_with_context(
        &self,
        options: UpdateCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<CategoriesModel>> {
        let span = info_span!(
            "watson_nlu",
            service = "categories",
            operation = "update_categories_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let model_id = options.model_id.clone().unwrap_or_default();
            let headers = options.headers.clone();
            let request = self
                .core
                .request(Method::PUT, &settings, CATEGORIES_PATH)?
                .path_param("model_id", &model_id)?
                .headers(&headers)?
                .form(options.into_form()?)
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }

    async fn delete_categories_model_with_context(
        &self,
        options: DeleteCategoriesModelOptions,
        ctx: &RequestContext,
    ) -> NluResult<DetailedResponse<DeleteModelResults>> {
        let span = info_span!(
            "watson_nlu",
            service = "categories",
            operation = "delete_categories_model"
        );
        async move {
            options.validate()?;

            let settings = self.core.settings();
            let request = self
                .core
                .request(Method::DELETE, &settings, CATEGORIES_PATH)?
                .path_param("model_id", options.model_id.as_deref().unwrap_or_default())?
                .headers(&options.headers)?
                .build();

            self.core.execute(request, &settings, ctx).await
        }
        .instrument(span)
        .await
    }
}
