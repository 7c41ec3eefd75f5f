use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::backend::{ApiError, ApiResult};
use crate::config::VoiceConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CallRequest<'a> {
    assistant_id: &'a str,
    phone_number_id: &'a str,
    customer: Customer<'a>,
    assistant_overrides: AssistantOverrides<'a>,
}

#[derive(Debug, Serialize)]
struct Customer<'a> {
    number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssistantOverrides<'a> {
    variable_values: &'a HashMap<String, String>,
}

/// Starts outbound check-in calls through Vapi's REST API
#[derive(Clone, Debug)]
pub struct VapiClient {
    http: reqwest::Client,
    config: VoiceConfig,
}

impl VapiClient {
    pub fn new(config: VoiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn call_url(&self) -> ApiResult<Url> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.config.api_url.to_string()))?
            .pop_if_empty()
            .push("call");
        Ok(url)
    }

    /// Ask the assistant to phone the configured customer number.
    /// Returns Vapi's call object untouched.
    pub async fn start_call(&self, variable_values: &HashMap<String, String>) -> ApiResult<Value> {
        let context = "Failed to start voice call";
        let url = self.call_url()?;

        let body = CallRequest {
            assistant_id: &self.config.assistant_id,
            phone_number_id: &self.config.phone_number_id,
            customer: Customer {
                number: &self.config.customer_number,
            },
            assistant_overrides: AssistantOverrides { variable_values },
        };

        tracing::info!(
            assistant_id = %self.config.assistant_id,
            variables = variable_values.len(),
            "Starting voice call"
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| {
                tracing::error!(error = %source, "Failed to call Vapi API");
                ApiError::Transport { context, source }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body, "Vapi API returned error");
            return Err(ApiError::Status { context, status });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { context, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> VoiceConfig {
        VoiceConfig {
            api_key: "test-key".to_string(),
            api_url: Url::parse(&server.uri()).unwrap(),
            assistant_id: "assistant-1".to_string(),
            phone_number_id: "phone-1".to_string(),
            customer_number: "+15550100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_start_call_sends_configuration() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/call"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({
                "assistantId": "assistant-1",
                "phoneNumberId": "phone-1",
                "customer": { "number": "+15550100" },
                "assistantOverrides": { "variableValues": { "clientName": "Jane" } }
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "id": "call-9", "status": "queued" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = VapiClient::new(config_for(&server));
        let variables = HashMap::from([("clientName".to_string(), "Jane".to_string())]);
        let call = client.start_call(&variables).await.unwrap();

        assert_eq!(call["id"], "call-9");
    }

    #[tokio::test]
    async fn test_start_call_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/call"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = VapiClient::new(config_for(&server));
        let err = client.start_call(&HashMap::new()).await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }
}
