//! Client interface and implementation for Watson Natural Language Understanding.

use crate::auth::AuthManager;
use crate::config::{parse_service_url, NluConfig, ServiceSettings, SharedSettings};
use crate::errors::NluResult;
use crate::resilience::RetryConfig;
use crate::services::analyze::{AnalyzeService, AnalyzeServiceImpl};
use crate::services::categories::{CategoriesService, CategoriesServiceImpl};
use crate::services::classifications::{ClassificationsService, ClassificationsServiceImpl};
use crate::services::models::{ModelsService, ModelsServiceImpl};
use crate::services::sentiment::{SentimentService, SentimentServiceImpl};
use crate::services::ServiceCore;
use crate::transport::{HttpTransport, ReqwestTransport, TransportConfig};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Trait defining the main Watson NLU client interface
pub trait NluClient: Send + Sync {
    /// Get the analyze service
    fn analyze(&self) -> Arc<dyn AnalyzeService>;

    /// Get the generic models service
    fn models(&self) -> Arc<dyn ModelsService>;

    /// Get the sentiment models service
    fn sentiment(&self) -> Arc<dyn SentimentService>;

    /// Get the categories models service
    fn categories(&self) -> Arc<dyn CategoriesService>;

    /// Get the classifications models service
    fn classifications(&self) -> Arc<dyn ClassificationsService>;
}

/// Watson NLU client.
///
/// Services are created on first use and share one transport, one
/// authenticator and one set of [`ServiceSettings`]. Changing the service
/// URL, default headers or retry policy affects every service, including
/// ones obtained before the change; calls already in flight keep the
/// settings they started with.
pub struct NaturalLanguageUnderstanding {
    core: ServiceCore,
    settings: SharedSettings,

    analyze_service: OnceCell<Arc<dyn AnalyzeService>>,
    models_service: OnceCell<Arc<dyn ModelsService>>,
    sentiment_service: OnceCell<Arc<dyn SentimentService>>,
    categories_service: OnceCell<Arc<dyn CategoriesService>>,
    classifications_service: OnceCell<Arc<dyn ClassificationsService>>,
}

impl NaturalLanguageUnderstanding {
    /// Create a new client from configuration
    pub fn new(config: NluConfig) -> NluResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&TransportConfig {
            timeout: config.timeout,
            enable_gzip: config.enable_gzip,
            disable_ssl_verification: config.disable_ssl_verification,
        })?) as Arc<dyn HttpTransport>;
        let auth_manager = config.authenticator.clone().into_manager()?;

        Ok(Self::with_dependencies(config, transport, auth_manager))
    }

    /// Create a new client from environment variables
    pub fn from_env() -> NluResult<Self> {
        Self::new(NluConfig::from_env()?)
    }

    /// Create a client with a custom transport and auth manager
    pub fn with_dependencies(
        config: NluConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        debug!(
            service_url = %config.service_url,
            version = %config.version,
            auth = auth_manager.scheme(),
            retries = config.retry.is_some(),
            "Creating Watson NLU client"
        );

        let settings: SharedSettings = Arc::new(RwLock::new(config.settings()));

        Self {
            core: ServiceCore::new(transport, auth_manager, settings.clone()),
            settings,
            analyze_service: OnceCell::new(),
            models_service: OnceCell::new(),
            sentiment_service: OnceCell::new(),
            categories_service: OnceCell::new(),
            classifications_service: OnceCell::new(),
        }
    }

    /// Replace the service URL.
    ///
    /// An empty string clears it; calls then fail validation until a URL is
    /// set again.
    pub fn set_service_url(&self, url: &str) -> NluResult<()> {
        let parsed = if url.trim().is_empty() {
            None
        } else {
            Some(parse_service_url(url)?)
        };
        self.settings.write().service_url = parsed;
        Ok(())
    }

    /// Current service URL
    pub fn service_url(&self) -> Option<Url> {
        self.settings.read().service_url.clone()
    }

    /// Replace the headers sent with every call
    pub fn set_default_headers(&self, headers: HashMap<String, String>) {
        self.settings.write().default_headers = headers;
    }

    /// Retry failed calls with the given policy
    pub fn enable_retries(&self, retry: RetryConfig) {
        self.settings.write().retry = Some(retry);
    }

    /// Send every call at most once
    pub fn disable_retries(&self) {
        self.settings.write().retry = None;
    }

    /// API version date sent with every call
    pub fn version(&self) -> String {
        self.settings.read().version.clone()
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> ServiceSettings {
        self.settings.read().clone()
    }
}

impl NluClient for NaturalLanguageUnderstanding {
    fn analyze(&self) -> Arc<dyn AnalyzeService> {
        self.analyze_service
            .get_or_init(|| Arc::new(AnalyzeServiceImpl::new(self.core.clone())))
            .clone()
    }

    fn models(&self) -> Arc<dyn ModelsService> {
        self.models_service
            .get_or_init(|| Arc::new(ModelsServiceImpl::new(self.core.clone())))
            .clone()
    }

    fn sentiment(&self) -> Arc<dyn SentimentService> {
        self.sentiment_service
            .get_or_init(|| Arc::new(SentimentServiceImpl::new(self.core.clone())))
            .clone()
    }

    fn categories(&self) -> Arc<dyn CategoriesService> {
        self.categories_service
            .get_or_init(|| Arc::new(CategoriesServiceImpl::new(self.core.clone())))
            .clone()
    }

    fn classifications(&self) -> Arc<dyn ClassificationsService> {
        self.classifications_service
            .get_or_init(|| Arc::new(ClassificationsServiceImpl::new(self.core.clone())))
            .clone()
    }
}

/// Create a new Watson NLU client from configuration
pub fn create_client(config: NluConfig) -> NluResult<NaturalLanguageUnderstanding> {
    NaturalLanguageUnderstanding::new(config)
}
