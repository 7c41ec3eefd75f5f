use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message type Vapi sends once a call has ended and been analysed
pub const END_OF_CALL_REPORT: &str = "end-of-call-report";

/// Inbound Vapi server message envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WebhookPayload {
    #[serde(default)]
    pub message: Option<WebhookMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WebhookMessage {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub analysis: Option<CallAnalysis>,
}

impl WebhookMessage {
    pub fn is_end_of_call_report(&self) -> bool {
        self.kind.as_deref() == Some(END_OF_CALL_REPORT)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CallAnalysis {
    /// JSON-encoded `{"mood": <number>, "triggers": [...]}` produced by the assistant
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    pub status: String,
}

impl WebhookAck {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}
