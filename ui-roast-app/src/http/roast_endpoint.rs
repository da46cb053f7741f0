use super::RoastSubmission;
use crate::AppContext;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use ui_roast_errors::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct RoastResponse {
    pub roast: String,
}

/// `POST /api/roast`. Every other method gets a JSON 405.
pub fn api_router<S>(ctx: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let body_limit = ctx.body_limit();

    Router::new()
        .route("/api/roast", post(generate_roast).fallback(method_not_allowed))
        .layer(body_limit)
        .with_state(ctx)
}

async fn generate_roast(
    State(ctx): State<AppContext>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<RoastResponse>, AppError> {
    let span = tracing::info_span!(
        "roast",
        request_id = %uuid::Uuid::new_v4(),
        modality = %ctx.modality
    );

    async move {
        let multipart = multipart.map_err(|e| {
            tracing::warn!("Rejected roast request: {}", e);
            AppError::MalformedRequest(e.to_string())
        })?;

        let request = RoastSubmission::read(multipart, ctx.modality)
            .await?
            .into_request(ctx.modality)
            .inspect_err(|e| tracing::warn!("Rejected roast request: {}", e))?;

        let roast = ctx.generate_roast.execute(request).await?;
        tracing::info!(tag = %roast.tag, demo = roast.demo, "Roast served");

        Ok(Json(RoastResponse {
            roast: roast.roast_text,
        }))
    }
    .instrument(span)
    .await
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
