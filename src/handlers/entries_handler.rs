use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    models::{CreateEntryInput, EntryMutationResponse},
    views::{client_form, ClientForm, FormEvent, Intensity, MoodChoice},
    AppError, AppResult, AppState,
};

fn form_error(form: &ClientForm) -> AppError {
    AppError::BadGateway(form.error().unwrap_or("Failed to save entry").to_string())
}

/// POST /api/entries - Save the client's mood and trigger
#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = CreateEntryInput,
    responses(
        (status = 200, description = "Entry recorded", body = EntryMutationResponse),
        (status = 422, description = "Mood or trigger missing, or intensity out of range"),
        (status = 502, description = "Backend failure")
    ),
    tag = "client"
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateEntryInput>,
) -> AppResult<Json<EntryMutationResponse>> {
    let mut form = ClientForm::default();

    match state.api.get_all_triggers().await {
        Ok(triggers) => {
            form.apply(FormEvent::TriggersLoaded(triggers));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load triggers");
            form.apply(FormEvent::TriggersFailed);
            return Err(form_error(&form));
        }
    }

    if let Some(mood) = input.mood.as_deref() {
        let choice = MoodChoice::parse(mood)
            .ok_or_else(|| AppError::Validation(format!("Unknown mood: {}", mood)))?;
        form.apply(FormEvent::SelectMood(choice));
    }

    if let Some(trigger_name) = input.trigger_name {
        form.apply(FormEvent::SelectTrigger(trigger_name.clone()));
        if !trigger_name.is_empty() && form.selected_trigger().is_none() {
            return Err(AppError::Validation(format!(
                "Unknown trigger: {}",
                trigger_name
            )));
        }
    }

    if let Some(intensity) = input.intensity {
        if Intensity::new(intensity).is_none() {
            return Err(AppError::Validation(format!(
                "Intensity must be between {} and {}",
                Intensity::MIN,
                Intensity::MAX
            )));
        }
        form.apply(FormEvent::SetIntensity(intensity));
    }

    let submission = form.apply(FormEvent::Submit).ok_or_else(|| {
        AppError::Validation("Select a mood and a trigger before saving".to_string())
    })?;

    tracing::debug!(
        phase = ?form.phase(),
        mood = ?form.mood(),
        intensity = form.intensity().value(),
        "Submitting entry"
    );

    if let Err(e) = client_form::submit(state.api.as_ref(), &submission).await {
        tracing::error!(error = %e, "Failed to record entry");
        form.apply(FormEvent::SubmitFailed(e.to_string()));
        return Err(form_error(&form));
    }
    form.apply(FormEvent::SubmitSucceeded);

    Ok(Json(EntryMutationResponse {
        success: true,
        message: Some("Entry recorded successfully!".to_string()),
    }))
}
