mod backend;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod startup;
mod views;
mod voice;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use backend::{BackendClient, MoodTrackerApi};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;
pub use voice::VapiClient;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn MoodTrackerApi>,
    pub voice: Option<VapiClient>,
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string()) == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,mood_tracker=debug,tower_http=debug".into());

    if use_json {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    handlers::debug::mark_start();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        e
    })?;

    let metrics_state = Arc::new(handlers::setup_metrics_recorder().map_err(|e| {
        tracing::error!("Failed to install metrics recorder: {}", e);
        e
    })?);
    tracing::info!("Metrics recorder initialized");

    let api = Arc::new(BackendClient::new(config.backend_url.clone()));
    tracing::info!(backend_url = %api.base_url(), "Backend client ready");

    let voice = config.voice.clone().map(VapiClient::new);
    if voice.is_none() {
        tracing::warn!("VAPI_API_KEY not set, voice calls disabled");
    }

    let bind_addr = config.bind_addr.clone();

    let state = Arc::new(AppState {
        api,
        voice,
        config,
        metrics: metrics_state,
    });

    let app = startup::build_router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
