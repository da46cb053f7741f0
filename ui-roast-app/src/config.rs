use crate::domain::{InputModality, UnknownModality};
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TEMPERATURE: f32 = 0.9;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("ROAST_INPUT_MODALITY: {0}")]
    InvalidModality(#[from] UnknownModality),

    #[error("{key} must be a number, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
}

/// Runtime settings read from the environment.
#[derive(Clone)]
pub struct Config {
    /// Absent means demo mode.
    pub api_key: Option<String>,
    pub api_base_url: Url,
    pub model: String,
    pub modality: InputModality,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout: Duration,
    pub max_upload_bytes: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut base_url = var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let modality = match var("ROAST_INPUT_MODALITY") {
            Some(value) => value.parse()?,
            None => InputModality::default(),
        };

        Ok(Self {
            api_key: var("OPENAI_API_KEY").map(|k| k.trim().to_string()),
            api_base_url: Url::parse(&base_url)?,
            model: var("ROAST_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            modality,
            max_tokens: parse_number(&var, "ROAST_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: parse_number(&var, "ROAST_TEMPERATURE")?.unwrap_or(DEFAULT_TEMPERATURE),
            request_timeout: Duration::from_secs(
                parse_number(&var, "ROAST_REQUEST_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            max_upload_bytes: parse_number(&var, "ROAST_MAX_UPLOAD_BYTES")?,
        })
    }

    pub fn is_demo(&self) -> bool {
        self.api_key.is_none()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url.as_str())
            .field("model", &self.model)
            .field("modality", &self.modality)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("request_timeout", &self.request_timeout)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    var(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { key, value })
        })
        .transpose()
}
