use crate::application::{GenerateRoast, RoastBackend, RoastGenerator};
use crate::config::Config;
use crate::domain::InputModality;
use crate::infrastructure::openai::OpenAiClient;
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use ui_roast_errors::AppError;

#[derive(Clone)]
pub struct AppContext {
    pub generate_roast: Arc<GenerateRoast>,
    pub modality: InputModality,
    pub max_upload_bytes: Option<usize>,
}

impl AppContext {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let backend = match &config.api_key {
            Some(api_key) => {
                tracing::info!("Using OpenAI backend with model {}", config.model);
                RoastBackend::Model(Arc::new(OpenAiClient::new(api_key.clone(), config)?))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, serving demo roasts");
                RoastBackend::Demo
            }
        };
        Ok(Self::new(config, backend))
    }

    /// Uses `generator` only when the config carries an API key.
    pub fn with_generator(config: &Config, generator: Arc<dyn RoastGenerator>) -> Self {
        let backend = if config.is_demo() {
            RoastBackend::Demo
        } else {
            RoastBackend::Model(generator)
        };
        Self::new(config, backend)
    }

    /// Upload cap for form posts; unlimited unless configured.
    pub fn body_limit(&self) -> DefaultBodyLimit {
        match self.max_upload_bytes {
            Some(limit) => DefaultBodyLimit::max(limit),
            None => DefaultBodyLimit::disable(),
        }
    }

    fn new(config: &Config, backend: RoastBackend) -> Self {
        Self {
            generate_roast: Arc::new(GenerateRoast::new(backend)),
            modality: config.modality,
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
