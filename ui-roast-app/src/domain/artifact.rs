use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// Which input field a deployment requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputModality {
    #[default]
    File,
    ImageUrl,
    SiteUrl,
}

impl InputModality {
    /// Multipart field carrying the artifact.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::ImageUrl => "imageUrl",
            Self::SiteUrl => "siteUrl",
        }
    }

    pub fn missing_message(&self) -> &'static str {
        match self {
            Self::File => "No file uploaded",
            Self::ImageUrl => "No image URL provided",
            Self::SiteUrl => "No site URL provided",
        }
    }
}

impl fmt::Display for InputModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input modality `{0}` (expected file, imageUrl or siteUrl)")]
pub struct UnknownModality(pub String);

impl FromStr for InputModality {
    type Err = UnknownModality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "file" | "upload" => Ok(Self::File),
            "imageurl" => Ok(Self::ImageUrl),
            "siteurl" => Ok(Self::SiteUrl),
            _ => Err(UnknownModality(s.to_string())),
        }
    }
}

/// The thing being roasted.
#[derive(Clone, PartialEq, Eq)]
pub enum Artifact {
    File {
        name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
    ImageUrl(String),
    SiteUrl(String),
}

impl Artifact {
    pub fn modality(&self) -> InputModality {
        match self {
            Self::File { .. } => InputModality::File,
            Self::ImageUrl(_) => InputModality::ImageUrl,
            Self::SiteUrl(_) => InputModality::SiteUrl,
        }
    }

    /// Value quoted verbatim in the prompt.
    pub fn reference(&self) -> &str {
        match self {
            Self::File { name, .. } => name,
            Self::ImageUrl(url) | Self::SiteUrl(url) => url,
        }
    }

    /// How the prompt refers to the artifact.
    pub fn subject(&self) -> String {
        match self {
            Self::File { name, .. } => format!("this UI screenshot ({name})"),
            Self::ImageUrl(url) => format!("the UI screenshot at {url}"),
            Self::SiteUrl(url) => format!("the website at {url}"),
        }
    }

    /// Image attached to the model call. Uploads travel as a base64 data URL.
    pub fn image_source(&self) -> Option<String> {
        match self {
            Self::File {
                content_type,
                bytes,
                ..
            } => Some(format!(
                "data:{};base64,{}",
                content_type.as_deref().unwrap_or(DEFAULT_IMAGE_TYPE),
                BASE64.encode(bytes)
            )),
            Self::ImageUrl(url) => Some(url.clone()),
            Self::SiteUrl(_) => None,
        }
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File {
                name,
                content_type,
                bytes,
            } => f
                .debug_struct("File")
                .field("name", name)
                .field("content_type", content_type)
                .field("len", &bytes.len())
                .finish(),
            Self::ImageUrl(url) => f.debug_tuple("ImageUrl").field(url).finish(),
            Self::SiteUrl(url) => f.debug_tuple("SiteUrl").field(url).finish(),
        }
    }
}
