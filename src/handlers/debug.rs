use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;

use crate::AppState;

#[derive(Serialize)]
pub struct DebugInfo {
    pub version: String,
    pub git_sha: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub backend_url: String,
    pub voice_enabled: bool,
    pub timestamp: u64,
}

/// Process start, for uptime
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Mark the process start; call once from main
pub fn mark_start() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Handler for the /debug endpoint
pub async fn debug_handler(State(state): State<Arc<AppState>>) -> Json<DebugInfo> {
    let uptime = START_TIME.elapsed().unwrap_or_default().as_secs();

    let info = DebugInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_sha: option_env!("GIT_SHA").unwrap_or("unknown").to_string(),
        environment: std::env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string()),
        uptime_seconds: uptime,
        backend_url: state.config.backend_url.to_string(),
        voice_enabled: state.voice.is_some(),
        timestamp: SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
    };

    Json(info)
}
