pub mod calls_handler;
pub mod debug;
pub mod entries_handler;
pub mod health;
pub mod metrics;
pub mod patients_handler;
pub mod triggers_handler;
pub mod webhook_handler;

pub use debug::debug_handler;
pub use health::health_check;
pub use self::metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
