use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client every entry is filed under; the app has a single client for now
pub const DEFAULT_CLIENT_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoodHistoryEntry {
    pub date: NaiveDateTime,
    pub mood: i32,
}

/// Body of `POST /mood`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMoodRequest {
    pub client_id: i64,
    pub mood: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoodRecorded {
    pub mood_id: i64,
}

/// Mood history row with the glyph the dashboard displays for it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoodHistoryView {
    pub date: NaiveDateTime,
    pub mood: i32,
    pub emoji: String,
}
