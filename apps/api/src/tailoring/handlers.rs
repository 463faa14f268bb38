//! Axum route handlers for the Tailoring API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::tailor::{TailorRequest, TailorResult};
use crate::state::AppState;
use crate::tailoring::service::tailor;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub api_key_configured: bool,
    pub model: String,
}

/// POST /api/tailor
///
/// Tailors the resume and writes a cover letter for one job posting.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResult>, AppError> {
    let result = tailor(state.generator.as_ref(), &state.config.segmenter, &request).await?;
    Ok(Json(result))
}

/// GET /api/status
///
/// Reports whether the generation credential is configured. Never echoes the key.
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        api_key_configured: state.generator.is_configured(),
        model: state.generator.model().to_string(),
    })
}
