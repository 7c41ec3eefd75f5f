use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{models::TriggerOption, AppResult, AppState};

/// GET /api/triggers - Triggers offered in the client form's picker
#[utoipa::path(
    get,
    path = "/api/triggers",
    responses(
        (status = 200, description = "List of triggers", body = Vec<TriggerOption>),
        (status = 502, description = "Backend failure")
    ),
    tag = "client"
)]
pub async fn get_triggers(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<TriggerOption>>> {
    let triggers = state.api.get_all_triggers().await?;

    Ok(Json(triggers.into_iter().map(TriggerOption::from).collect()))
}
