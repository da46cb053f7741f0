mod client;
pub mod prompt;
mod types;

pub use client::OpenAiClient;
pub use prompt::{build_roast_prompt, template_for, PromptTemplate};
