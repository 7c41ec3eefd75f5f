use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{models::StartCallInput, AppError, AppResult, AppState};

/// POST /api/calls - Start a voice check-in call
#[utoipa::path(
    post,
    path = "/api/calls",
    request_body = StartCallInput,
    responses(
        (status = 200, description = "Call object returned by Vapi"),
        (status = 502, description = "Vapi rejected the call"),
        (status = 503, description = "Voice calls are not configured")
    ),
    tag = "client"
)]
pub async fn start_call(
    State(state): State<Arc<AppState>>,
    Json(input): Json<StartCallInput>,
) -> AppResult<Json<Value>> {
    let voice = state
        .voice
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("Voice calls are not configured".to_string()))?;

    let call = voice.start_call(&input.variable_values).await?;

    Ok(Json(call))
}
