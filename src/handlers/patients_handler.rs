use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::{
    models::{Patient, PatientDetails},
    views::{dashboard, Dashboard, DashboardCommand, DashboardEvent},
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PatientSearchQuery {
    /// Case-insensitive part of "First Last"
    pub search: Option<String>,
}

fn view_error(message: Option<&str>, fallback: &str) -> AppError {
    AppError::BadGateway(message.unwrap_or(fallback).to_string())
}

async fn load_dashboard(state: &AppState) -> AppResult<Dashboard> {
    let mut dashboard = Dashboard::default();

    match state.api.get_all_clients().await {
        Ok(patients) => {
            dashboard.apply(DashboardEvent::PatientsLoaded(patients));
            Ok(dashboard)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load patients");
            dashboard.apply(DashboardEvent::PatientsFailed);
            Err(view_error(dashboard.error(), dashboard::PATIENTS_FAILED))
        }
    }
}

/// GET /api/patients?search=
#[utoipa::path(
    get,
    path = "/api/patients",
    params(PatientSearchQuery),
    responses(
        (status = 200, description = "Patients matching the search term", body = Vec<Patient>),
        (status = 502, description = "Backend failure")
    ),
    tag = "dashboard"
)]
pub async fn get_patients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PatientSearchQuery>,
) -> AppResult<Json<Vec<Patient>>> {
    let mut dashboard = load_dashboard(&state).await?;

    if let Some(term) = query.search {
        dashboard.apply(DashboardEvent::SearchChanged(term));
    }

    let patients = dashboard.filtered_patients().into_iter().cloned().collect();

    Ok(Json(patients))
}

/// GET /api/patients/{client_id} - Patient with histories and chart series
#[utoipa::path(
    get,
    path = "/api/patients/{client_id}",
    params(
        ("client_id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Patient details", body = PatientDetails),
        (status = 404, description = "Patient not found"),
        (status = 502, description = "Backend failure")
    ),
    tag = "dashboard"
)]
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<i64>,
) -> AppResult<Json<PatientDetails>> {
    let mut dashboard = load_dashboard(&state).await?;

    let Some(DashboardCommand::LoadHistory(patient)) =
        dashboard.apply(DashboardEvent::SelectPatient(client_id))
    else {
        return Err(AppError::NotFound(format!("Patient {} not found", client_id)));
    };

    match dashboard::load_patient_history(state.api.as_ref(), &patient).await {
        Ok(history) => {
            dashboard.apply(DashboardEvent::HistoryLoaded { client_id, history });
        }
        Err(e) => {
            tracing::error!(error = %e, client_id, "Failed to load patient data");
            dashboard.apply(DashboardEvent::HistoryFailed { client_id });
            return Err(view_error(dashboard.error(), dashboard::HISTORY_FAILED));
        }
    }

    dashboard
        .selected()
        .and_then(|selected| selected.details())
        .map(Json)
        .ok_or_else(|| AppError::Internal(dashboard::HISTORY_FAILED.to_string()))
}
