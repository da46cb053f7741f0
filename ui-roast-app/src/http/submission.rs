use crate::domain::{Artifact, InputModality, RoastRequest, DEFAULT_JUDGE};
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use ui_roast_errors::AppError;

const FALLBACK_FILE_NAME: &str = "screenshot";

/// Fields of a roast form post. Only the active modality's artifact is kept.
#[derive(Debug, Default)]
pub struct RoastSubmission {
    pub judge: Option<String>,
    pub category: Option<String>,
    pub artifact: Option<Artifact>,
}

impl RoastSubmission {
    pub async fn read(mut multipart: Multipart, modality: InputModality) -> Result<Self, AppError> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "judge" => submission.judge = read_text(field).await?,
                "category" => submission.category = read_text(field).await?,
                other if other == modality.field_name() => {
                    submission.artifact = read_artifact(field, modality).await?;
                }
                other => tracing::debug!("Ignoring form field `{}`", other),
            }
        }

        Ok(submission)
    }

    /// Judge wins over category.
    pub fn tag(&self) -> Option<&str> {
        self.judge.as_deref().or(self.category.as_deref())
    }

    /// Checks the required artifact and falls back to the default judge.
    pub fn into_request(self, modality: InputModality) -> Result<RoastRequest, AppError> {
        let tag = self.tag().unwrap_or(DEFAULT_JUDGE).to_string();
        let artifact = self
            .artifact
            .ok_or_else(|| AppError::MissingInput(modality.missing_message().to_string()))?;

        Ok(RoastRequest::new(Some(tag), artifact))
    }
}

async fn read_text(field: Field<'_>) -> Result<Option<String>, AppError> {
    let text = field.text().await.map_err(malformed)?;
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

async fn read_artifact(
    field: Field<'_>,
    modality: InputModality,
) -> Result<Option<Artifact>, AppError> {
    match modality {
        InputModality::File => {
            let name = field
                .file_name()
                .filter(|n| !n.is_empty())
                .unwrap_or(FALLBACK_FILE_NAME)
                .to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(malformed)?;

            // Browsers send an empty part when no file was picked.
            if bytes.is_empty() {
                return Ok(None);
            }
            Ok(Some(Artifact::File {
                name,
                content_type,
                bytes: bytes.to_vec(),
            }))
        }
        InputModality::ImageUrl => Ok(read_text(field).await?.map(Artifact::ImageUrl)),
        InputModality::SiteUrl => Ok(read_text(field).await?.map(Artifact::SiteUrl)),
    }
}

fn malformed(err: MultipartError) -> AppError {
    AppError::MalformedRequest(err.to_string())
}
