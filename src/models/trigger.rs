use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trigger {
    pub trigger_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub feelings: Vec<String>,
}

impl Trigger {
    /// Option label shown in the trigger picker, e.g. "Loud noises - anxious, tense"
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.feelings.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriggerHistoryEntry {
    pub date: NaiveDateTime,
    pub trigger_name: String,
    pub intensity: i32,
    #[serde(default)]
    pub feelings: Vec<String>,
}

/// Body of `POST /trigger-history`
#[derive(Debug, Clone, Serialize)]
pub struct RecordTriggerRequest<'a> {
    pub trigger_name: &'a str,
    pub intensity: u8,
}

/// Body of `POST /trigger-history/batch`; entries are the call summary's
/// trigger objects, untouched
#[derive(Debug, Clone, Serialize)]
pub struct RecordTriggersBatchRequest<'a> {
    pub triggers: &'a [Value],
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TriggerRecorded {
    pub history_id: i64,
}

/// Trigger plus its picker label, as served to the client view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TriggerOption {
    #[serde(flatten)]
    pub trigger: Trigger,
    pub label: String,
}

impl From<Trigger> for TriggerOption {
    fn from(trigger: Trigger) -> Self {
        let label = trigger.label();
        Self { trigger, label }
    }
}
