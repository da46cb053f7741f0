use super::RoastGenerator;
use crate::domain::{Roast, RoastRequest, Selection};
use crate::infrastructure::openai::build_roast_prompt;
use std::sync::Arc;
use ui_roast_errors::AppError;

/// Returned when no API key is configured.
pub const DEMO_ROAST: &str = "[Demo roast: no AI key configured]
Oh wow... this UI is so bad it made me cry in Comic Sans.
1. Use colors that don't blind the user.
2. Organize buttons like a human would.
3. Stop using 20px padding everywhere like it's a magic spell.";

/// Returned when the model answers without usable text.
pub const NO_ROAST_PLACEHOLDER: &str = "No roast generated";

pub enum RoastBackend {
    Demo,
    Model(Arc<dyn RoastGenerator>),
}

pub struct GenerateRoast {
    backend: RoastBackend,
}

impl GenerateRoast {
    pub fn new(backend: RoastBackend) -> Self {
        Self { backend }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self.backend, RoastBackend::Demo)
    }

    pub async fn execute(&self, request: RoastRequest) -> Result<Roast, AppError> {
        let tag = Selection::from_tag(request.tag.as_deref()).id();

        let generator = match &self.backend {
            RoastBackend::Demo => {
                tracing::info!(tag, "Demo mode, skipping AI call");
                return Ok(Roast::demo(tag, DEMO_ROAST.to_string()));
            }
            RoastBackend::Model(generator) => generator,
        };

        let prompt = build_roast_prompt(request.tag.as_deref(), &request.artifact);

        match generator.generate(&prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => Ok(Roast::new(tag, text)),
            Ok(_) => {
                tracing::warn!(tag, "AI returned no usable text");
                Ok(Roast::new(tag, NO_ROAST_PLACEHOLDER.to_string()))
            }
            Err(e) => {
                tracing::error!(tag, error = %e, "Roast generation failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Artifact, RoastPrompt};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingGenerator {
        reply: Result<Option<String>, AppError>,
        prompts: Mutex<Vec<RoastPrompt>>,
    }

    impl RecordingGenerator {
        fn replying(reply: Result<Option<String>, AppError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl RoastGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &RoastPrompt) -> Result<Option<String>, AppError> {
            self.prompts.lock().unwrap().push(prompt.clone());
            self.reply.clone()
        }
    }

    fn request(tag: &str) -> RoastRequest {
        RoastRequest::new(
            Some(tag.to_string()),
            Artifact::ImageUrl("https://example.com/ui.png".into()),
        )
    }

    #[tokio::test]
    async fn test_demo_backend_returns_fixed_roast() {
        let roast = GenerateRoast::new(RoastBackend::Demo)
            .execute(request("grandma"))
            .await
            .unwrap();
        assert!(roast.demo);
        assert_eq!(roast.roast_text, DEMO_ROAST);
        assert_eq!(roast.tag, "grandma");
    }

    #[tokio::test]
    async fn test_model_text_is_returned_as_is() {
        let generator = RecordingGenerator::replying(Ok(Some("Grandma is confused.".into())));
        let use_case = GenerateRoast::new(RoastBackend::Model(generator.clone()));

        let roast = use_case.execute(request("grandma")).await.unwrap();
        assert_eq!(roast.roast_text, "Grandma is confused.");
        assert!(!roast.demo);

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].text.contains("grandma"));
        assert!(prompts[0].text.contains("https://example.com/ui.png"));
        assert_eq!(prompts[0].image.as_deref(), Some("https://example.com/ui.png"));
    }

    #[tokio::test]
    async fn test_blank_or_missing_text_uses_placeholder() {
        for reply in [Ok(None), Ok(Some("   ".to_string()))] {
            let use_case =
                GenerateRoast::new(RoastBackend::Model(RecordingGenerator::replying(reply)));
            let roast = use_case.execute(request("gordon")).await.unwrap();
            assert_eq!(roast.roast_text, NO_ROAST_PLACEHOLDER);
        }
    }

    #[tokio::test]
    async fn test_generator_error_is_propagated() {
        let use_case = GenerateRoast::new(RoastBackend::Model(RecordingGenerator::replying(Err(
            AppError::Upstream("boom".into()),
        ))));
        assert!(matches!(
            use_case.execute(request("gordon")).await,
            Err(AppError::Upstream(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_tag_is_reported_as_generic() {
        let generator = RecordingGenerator::replying(Ok(Some("meh".into())));
        let roast = GenerateRoast::new(RoastBackend::Model(generator))
            .execute(request("simon_cowell"))
            .await
            .unwrap();
        assert_eq!(roast.tag, "generic");
    }
}
