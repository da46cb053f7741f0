use crate::domain::RoastPrompt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, prompt: &RoastPrompt, max_tokens: u32, temperature: f32) -> Self {
        let content = match &prompt.image {
            Some(url) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: prompt.text.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: url.clone() },
                },
            ]),
            None => MessageContent::Text(prompt.text.clone()),
        };

        Self {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content,
            }],
            max_tokens,
            temperature,
        }
    }
}

impl ChatCompletionResponse {
    /// First non-blank message text, if any.
    pub fn first_text(&self) -> Option<String> {
        self.choices
            .iter()
            .filter_map(|c| c.message.content.as_deref())
            .find(|text| !text.trim().is_empty())
            .map(str::to_string)
    }
}
