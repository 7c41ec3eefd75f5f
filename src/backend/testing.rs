//! In-memory `MoodTrackerApi` that records every call it receives.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Mutex;

use super::{ApiError, ApiResult, MoodTrackerApi};
use crate::models::{
    ChartPoint, MoodHistoryEntry, MoodRecorded, Patient, Trigger, TriggerHistoryEntry,
    TriggerRecorded,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RecordMood { client_id: i64, mood: i32 },
    RecordTrigger { trigger_name: String, intensity: u8 },
    RecordTriggersBatch(Vec<Value>),
    GetAllClients,
    GetAllTriggers,
    GetTriggerHistory(String),
    GetMoodHistory(String),
    GetChartData(String),
}

#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<Call>>,
    pub patients: Vec<Patient>,
    pub triggers: Vec<Trigger>,
    pub trigger_history: Vec<TriggerHistoryEntry>,
    pub mood_history: Vec<MoodHistoryEntry>,
    pub chart_data: Vec<ChartPoint>,
    /// Status every write call fails with
    pub fail_writes: Option<StatusCode>,
    /// Status every read call fails with
    pub fail_reads: Option<StatusCode>,
    /// Status only the trigger batch call fails with
    pub fail_batch: Option<StatusCode>,
    /// Status only the per-patient history reads fail with
    pub fail_history: Option<StatusCode>,
}

impl FakeApi {
    pub fn failing_writes(status: StatusCode) -> Self {
        Self {
            fail_writes: Some(status),
            ..Default::default()
        }
    }

    pub fn failing_reads(status: StatusCode) -> Self {
        Self {
            fail_reads: Some(status),
            ..Default::default()
        }
    }

    pub fn failing_batch(status: StatusCode) -> Self {
        Self {
            fail_batch: Some(status),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self, context: &'static str) -> ApiResult<()> {
        match self.fail_writes {
            Some(status) => Err(ApiError::Status { context, status }),
            None => Ok(()),
        }
    }

    fn read_result(&self, context: &'static str) -> ApiResult<()> {
        match self.fail_reads {
            Some(status) => Err(ApiError::Status { context, status }),
            None => Ok(()),
        }
    }

    fn history_result(&self, context: &'static str) -> ApiResult<()> {
        self.read_result(context)?;
        match self.fail_history {
            Some(status) => Err(ApiError::Status { context, status }),
            None => Ok(()),
        }
    }
}

pub fn patient(client_id: i64, first_name: &str, last_name: &str) -> Patient {
    Patient {
        client_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone_number: None,
    }
}

#[async_trait]
impl MoodTrackerApi for FakeApi {
    async fn record_mood(&self, client_id: i64, mood: i32) -> ApiResult<MoodRecorded> {
        self.record(Call::RecordMood { client_id, mood });
        self.write_result("Failed to record mood")?;
        Ok(MoodRecorded { mood_id: 1 })
    }

    async fn record_trigger(
        &self,
        trigger_name: &str,
        intensity: u8,
    ) -> ApiResult<TriggerRecorded> {
        self.record(Call::RecordTrigger {
            trigger_name: trigger_name.to_string(),
            intensity,
        });
        self.write_result("Failed to record trigger")?;
        Ok(TriggerRecorded { history_id: 1 })
    }

    async fn record_triggers_batch(&self, triggers: &[Value]) -> ApiResult<Value> {
        self.record(Call::RecordTriggersBatch(triggers.to_vec()));
        self.write_result("Failed to record triggers")?;
        if let Some(status) = self.fail_batch {
            return Err(ApiError::Status {
                context: "Failed to record triggers",
                status,
            });
        }
        Ok(json!({ "recorded": triggers.len() }))
    }

    async fn get_all_clients(&self) -> ApiResult<Vec<Patient>> {
        self.record(Call::GetAllClients);
        self.read_result("Failed to fetch clients")?;
        Ok(self.patients.clone())
    }

    async fn get_all_triggers(&self) -> ApiResult<Vec<Trigger>> {
        self.record(Call::GetAllTriggers);
        self.read_result("Failed to fetch triggers")?;
        Ok(self.triggers.clone())
    }

    async fn get_trigger_history(&self, full_name: &str) -> ApiResult<Vec<TriggerHistoryEntry>> {
        self.record(Call::GetTriggerHistory(full_name.to_string()));
        self.history_result("Failed to fetch trigger history")?;
        Ok(self.trigger_history.clone())
    }

    async fn get_mood_history(&self, full_name: &str) -> ApiResult<Vec<MoodHistoryEntry>> {
        self.record(Call::GetMoodHistory(full_name.to_string()));
        self.history_result("Failed to fetch mood history")?;
        Ok(self.mood_history.clone())
    }

    async fn get_chart_data(&self, full_name: &str) -> ApiResult<Vec<ChartPoint>> {
        self.record(Call::GetChartData(full_name.to_string()));
        self.history_result("Failed to fetch chart data")?;
        Ok(self.chart_data.clone())
    }
}
