pub mod client;
pub mod error;

#[cfg(test)]
pub mod testing;

pub use client::{BackendClient, MoodTrackerApi};
pub use error::{ApiError, ApiResult};
