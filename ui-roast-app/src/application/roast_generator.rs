use crate::domain::RoastPrompt;
use async_trait::async_trait;
use ui_roast_errors::AppError;

/// Text-generation service behind a roast.
///
/// Built once per process and shared. `Ok(None)` means the service answered
/// without usable text.
#[async_trait]
pub trait RoastGenerator: Send + Sync {
    async fn generate(&self, prompt: &RoastPrompt) -> Result<Option<String>, AppError>;
}
