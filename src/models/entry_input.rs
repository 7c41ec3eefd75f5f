use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for recording a client's mood and trigger in one go
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEntryInput {
    /// One of "sad", "neutral", "happy"
    pub mood: Option<String>,
    pub trigger_name: Option<String>,
    /// 1-10, defaults to 5
    pub intensity: Option<i32>,
}

/// Response for entry mutations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryMutationResponse {
    pub success: bool,
    pub message: Option<String>,
}
