use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::application::RoastGenerator;
use crate::config::Config;
use crate::domain::RoastPrompt;
use async_trait::async_trait;
use ui_roast_errors::AppError;
use url::Url;

const COMPLETIONS_PATH: &str = "chat/completions";

pub struct OpenAiClient {
    http_client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(api_key: String, config: &Config) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let endpoint = config
            .api_base_url
            .join(COMPLETIONS_PATH)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl RoastGenerator for OpenAiClient {
    async fn generate(&self, prompt: &RoastPrompt) -> Result<Option<String>, AppError> {
        let request =
            ChatCompletionRequest::new(&self.model, prompt, self.max_tokens, self.temperature);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI error: {} - {}", status, body);
            return Err(AppError::Upstream(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(map_transport_error)?;

        Ok(completion.first_text())
    }
}

fn map_transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout
    } else {
        AppError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> Config {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let base = format!("http://{addr}/v1/");
        Config::from_lookup(|key| (key == "OPENAI_BASE_URL").then(|| base.clone())).unwrap()
    }

    fn prompt() -> RoastPrompt {
        RoastPrompt {
            text: "You are Gordon Ramsay. Roast this UI screenshot (a.png).".into(),
            image: Some("data:image/png;base64,AAAA".into()),
        }
    }

    #[tokio::test]
    async fn test_extracts_first_choice_text() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["authorization"], "Bearer sk-test");
                assert_eq!(body["model"], "gpt-4o");
                assert_eq!(body["messages"][0]["content"][1]["type"], "image_url");
                Json(json!({
                    "choices": [{ "message": { "role": "assistant", "content": "It's RAW!" } }]
                }))
            }),
        );
        let config = serve(router).await;
        let client = OpenAiClient::new("sk-test".into(), &config).unwrap();

        let text = client.generate(&prompt()).await.unwrap();
        assert_eq!(text.as_deref(), Some("It's RAW!"));
    }

    #[tokio::test]
    async fn test_empty_choices_are_not_an_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let config = serve(router).await;
        let client = OpenAiClient::new("sk-test".into(), &config).unwrap();

        assert_eq!(client.generate(&prompt()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_error_status_becomes_upstream_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, "bad key") }),
        );
        let config = serve(router).await;
        let client = OpenAiClient::new("sk-wrong".into(), &config).unwrap();

        let err = client.generate(&prompt()).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(ref msg) if msg.contains("401")));
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_upstream_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { "definitely not json" }),
        );
        let config = serve(router).await;
        let client = OpenAiClient::new("sk-test".into(), &config).unwrap();

        assert!(matches!(
            client.generate(&prompt()).await,
            Err(AppError::Upstream(_))
        ));
    }
}
