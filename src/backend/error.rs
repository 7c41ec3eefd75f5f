use reqwest::StatusCode;

/// Failure of a single backend call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{context}: backend returned {status}")]
    Status {
        context: &'static str,
        status: StatusCode,
    },

    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context}: invalid response body: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status reported by the backend, if the call got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
