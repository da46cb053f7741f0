use super::Artifact;
use serde::{Deserialize, Serialize};

/// Judge used when a request names neither a judge nor a category.
pub const DEFAULT_JUDGE: &str = "gordon";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roast {
    pub tag: String,
    pub roast_text: String,
    pub demo: bool,
}

impl Roast {
    pub fn new(tag: impl Into<String>, roast_text: String) -> Self {
        Self {
            tag: tag.into(),
            roast_text,
            demo: false,
        }
    }

    pub fn demo(tag: impl Into<String>, roast_text: String) -> Self {
        Self {
            demo: true,
            ..Self::new(tag, roast_text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastRequest {
    pub tag: Option<String>,
    pub artifact: Artifact,
}

impl RoastRequest {
    pub fn new(tag: Option<String>, artifact: Artifact) -> Self {
        Self { tag, artifact }
    }
}

/// Composed instruction plus an optional image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastPrompt {
    pub text: String,
    pub image: Option<String>,
}
