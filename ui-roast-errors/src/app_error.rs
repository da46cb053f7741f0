use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

const GENERATION_FAILED: &str = "Failed to generate roast";

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    MissingInput(String),

    #[error("Malformed roast request: {0}")]
    MalformedRequest(String),

    #[error("Failed to reach the AI service: {0}")]
    Upstream(String),

    #[error("Request to the AI service timed out")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show to the caller. Upstream detail stays in `Display`.
    pub fn user_message(&self) -> &str {
        match self {
            Self::MethodNotAllowed => "Method not allowed",
            Self::MissingInput(msg) => msg,
            Self::MalformedRequest(_) => "Invalid roast request",
            Self::Upstream(_) | Self::Timeout | Self::Internal(_) => GENERATION_FAILED,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingInput(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Timeout | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorResponse {
                error: self.user_message(),
            }),
        )
            .into_response()
    }
}
