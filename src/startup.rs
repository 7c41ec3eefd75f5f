use axum::{
    extract::Request,
    http::{header, Method},
    middleware,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::{handlers, middleware as mw, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
        )
    });

    // Dashboard routes
    let patient_routes = Router::new()
        .route("/", get(handlers::patients_handler::get_patients))
        .route("/{client_id}", get(handlers::patients_handler::get_patient));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/debug", get(handlers::debug_handler))
        .route(
            "/api/vapi-webhook",
            post(handlers::webhook_handler::vapi_webhook),
        )
        .route("/api/triggers", get(handlers::triggers_handler::get_triggers))
        .route("/api/entries", post(handlers::entries_handler::create_entry))
        .route("/api/calls", post(handlers::calls_handler::start_call))
        .nest("/api/patients", patient_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/scalar", get(scalar_ui))
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(middleware::from_fn(mw::request_id_middleware))
                .layer(middleware::from_fn(mw::metrics_middleware))
                .layer(cors),
        )
        .with_state(state)
}

async fn scalar_ui() -> Html<String> {
    Html(Scalar::new(ApiDoc::openapi()).to_html())
}
