use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiError, ApiResult};
use crate::models::{
    ChartPoint, MoodHistoryEntry, MoodRecorded, Patient, RecordMoodRequest, RecordTriggerRequest,
    RecordTriggersBatchRequest, Trigger, TriggerHistoryEntry, TriggerRecorded,
};

/// Operations offered by the mood tracking backend, one per endpoint
#[async_trait]
pub trait MoodTrackerApi: Send + Sync {
    async fn record_mood(&self, client_id: i64, mood: i32) -> ApiResult<MoodRecorded>;

    async fn record_trigger(&self, trigger_name: &str, intensity: u8)
        -> ApiResult<TriggerRecorded>;

    /// Triggers are forwarded exactly as the call summary reported them
    async fn record_triggers_batch(&self, triggers: &[Value]) -> ApiResult<Value>;

    async fn get_all_clients(&self) -> ApiResult<Vec<Patient>>;

    async fn get_all_triggers(&self) -> ApiResult<Vec<Trigger>>;

    async fn get_trigger_history(&self, full_name: &str) -> ApiResult<Vec<TriggerHistoryEntry>>;

    async fn get_mood_history(&self, full_name: &str) -> ApiResult<Vec<MoodHistoryEntry>>;

    async fn get_chart_data(&self, full_name: &str) -> ApiResult<Vec<ChartPoint>>;
}

/// reqwest-backed client for the REST backend.
///
/// One request per call: no retries, no timeouts, no caching.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL plus `segments`, each percent-encoded as a single path segment
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &'static str,
    ) -> ApiResult<T> {
        let response = request.send().await.map_err(|source| {
            tracing::error!(error = %source, context, "Backend request failed");
            ApiError::Transport { context, source }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body, context, "Backend returned error");
            return Err(ApiError::Status { context, status });
        }

        response.json::<T>().await.map_err(|source| {
            tracing::error!(error = %source, context, "Failed to parse backend response");
            ApiError::Decode { context, source }
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        context: &'static str,
    ) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET backend");
        self.send(self.http.get(url), context).await
    }
}

#[async_trait]
impl MoodTrackerApi for BackendClient {
    async fn record_mood(&self, client_id: i64, mood: i32) -> ApiResult<MoodRecorded> {
        let url = self.endpoint(&["mood"])?;
        tracing::debug!(%url, client_id, mood, "Recording mood");
        let body = RecordMoodRequest { client_id, mood };
        self.send(self.http.post(url).json(&body), "Failed to record mood")
            .await
    }

    async fn record_trigger(
        &self,
        trigger_name: &str,
        intensity: u8,
    ) -> ApiResult<TriggerRecorded> {
        let url = self.endpoint(&["trigger-history"])?;
        tracing::debug!(%url, trigger_name, intensity, "Recording trigger");
        let body = RecordTriggerRequest {
            trigger_name,
            intensity,
        };
        self.send(self.http.post(url).json(&body), "Failed to record trigger")
            .await
    }

    async fn record_triggers_batch(&self, triggers: &[Value]) -> ApiResult<Value> {
        let url = self.endpoint(&["trigger-history", "batch"])?;
        tracing::debug!(%url, count = triggers.len(), "Recording trigger batch");
        let body = RecordTriggersBatchRequest { triggers };
        self.send(self.http.post(url).json(&body), "Failed to record triggers")
            .await
    }

    async fn get_all_clients(&self) -> ApiResult<Vec<Patient>> {
        self.get(&["clients"], "Failed to fetch clients").await
    }

    async fn get_all_triggers(&self) -> ApiResult<Vec<Trigger>> {
        self.get(&["triggers"], "Failed to fetch triggers").await
    }

    async fn get_trigger_history(&self, full_name: &str) -> ApiResult<Vec<TriggerHistoryEntry>> {
        self.get(
            &["trigger-history", full_name],
            "Failed to fetch trigger history",
        )
        .await
    }

    async fn get_mood_history(&self, full_name: &str) -> ApiResult<Vec<MoodHistoryEntry>> {
        self.get(&["mood-history", full_name], "Failed to fetch mood history")
            .await
    }

    async fn get_chart_data(&self, full_name: &str) -> ApiResult<Vec<ChartPoint>> {
        self.get(&["chart-data", full_name], "Failed to fetch chart data")
            .await
    }
}
