use axum::{body::Bytes, extract::State, Json};
use metrics::counter;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    backend::{ApiError, MoodTrackerApi},
    models::{WebhookAck, WebhookPayload, DEFAULT_CLIENT_ID},
    AppError, AppResult, AppState,
};

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Invalid webhook body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("End-of-call report has no analysis summary")]
    MissingSummary,

    #[error("Invalid call summary: {0}")]
    MalformedSummary(#[source] serde_json::Error),

    #[error("Call summary triggers must be a list")]
    MalformedTriggers,

    #[error(transparent)]
    Backend(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// Not an end-of-call report
    Ignored,
    /// Summary carried a non-numeric mood; nothing was recorded
    InvalidMood,
    Recorded { mood: i32, triggers: usize },
}

impl ReportOutcome {
    fn label(&self) -> &'static str {
        match self {
            ReportOutcome::Ignored => "ignored",
            ReportOutcome::InvalidMood => "invalid_mood",
            ReportOutcome::Recorded { .. } => "recorded",
        }
    }
}

/// Nearest integer mood, or `None` when it does not fit an `i32`
fn round_mood(mood: f64) -> Option<i32> {
    let rounded = mood.round();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&rounded)
        .then_some(rounded as i32)
}

/// Parse a Vapi server message and record the mood and triggers of an
/// end-of-call report.
///
/// The mood is recorded before the trigger batch. A failing batch call does
/// not undo the recorded mood.
pub async fn process_webhook(
    api: &dyn MoodTrackerApi,
    body: &[u8],
) -> Result<ReportOutcome, WebhookError> {
    let payload: WebhookPayload =
        serde_json::from_slice(body).map_err(WebhookError::MalformedBody)?;

    let Some(message) = payload.message.filter(|m| m.is_end_of_call_report()) else {
        return Ok(ReportOutcome::Ignored);
    };

    tracing::info!("End of call report received");

    let summary = message
        .analysis
        .and_then(|a| a.summary)
        .ok_or(WebhookError::MissingSummary)?;

    let summary: Value =
        serde_json::from_str(&summary).map_err(WebhookError::MalformedSummary)?;
    if summary.is_null() {
        return Err(WebhookError::MissingSummary);
    }

    tracing::debug!(%summary, "Parsed call summary");

    let Some(mood) = summary.get("mood").and_then(Value::as_f64).and_then(round_mood) else {
        tracing::error!(mood = ?summary.get("mood"), "Invalid mood value");
        return Ok(ReportOutcome::InvalidMood);
    };

    let triggers: &[Value] = match summary.get("triggers") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => return Err(WebhookError::MalformedTriggers),
    };

    tracing::info!(mood, triggers = triggers.len(), "Recording call report");

    api.record_mood(DEFAULT_CLIENT_ID, mood).await?;
    api.record_triggers_batch(triggers).await?;

    Ok(ReportOutcome::Recorded {
        mood,
        triggers: triggers.len(),
    })
}

/// POST /api/vapi-webhook - Receive Vapi server messages
#[utoipa::path(
    post,
    path = "/api/vapi-webhook",
    request_body = WebhookPayload,
    responses(
        (status = 200, description = "Message processed (or ignored)", body = WebhookAck),
        (status = 500, description = "Unparsable report or backend failure")
    ),
    tag = "webhook"
)]
pub async fn vapi_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<WebhookAck>> {
    match process_webhook(state.api.as_ref(), &body).await {
        Ok(outcome) => {
            counter!("webhook_reports_total", "outcome" => outcome.label()).increment(1);
            Ok(Json(WebhookAck::success()))
        }
        Err(e) => {
            tracing::error!(error = %e, "Webhook error");
            counter!("webhook_reports_total", "outcome" => "error").increment(1);
            Err(AppError::Internal("Internal server error".to_string()))
        }
    }
}
