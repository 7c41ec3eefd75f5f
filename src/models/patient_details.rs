use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ChartPoint, MoodHistoryView, Patient, TriggerHistoryEntry};

/// A selected patient with histories and chart series attached
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientDetails {
    #[serde(flatten)]
    pub patient: Patient,
    pub full_name: String,
    pub trigger_history: Vec<TriggerHistoryEntry>,
    pub mood_history: Vec<MoodHistoryView>,
    pub chart_data: Vec<ChartPoint>,
}
