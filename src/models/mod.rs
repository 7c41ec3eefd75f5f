pub mod call_input;
pub mod chart;
pub mod entry_input;
pub mod mood;
pub mod patient;
pub mod patient_details;
pub mod trigger;
pub mod webhook;

pub use call_input::StartCallInput;
pub use chart::ChartPoint;
pub use entry_input::{CreateEntryInput, EntryMutationResponse};
pub use mood::{MoodHistoryEntry, MoodHistoryView, MoodRecorded, RecordMoodRequest, DEFAULT_CLIENT_ID};
pub use patient::Patient;
pub use patient_details::PatientDetails;
pub use trigger::{
    RecordTriggerRequest, RecordTriggersBatchRequest, Trigger, TriggerHistoryEntry, TriggerOption,
    TriggerRecorded,
};
pub use webhook::{CallAnalysis, WebhookAck, WebhookMessage, WebhookPayload};
