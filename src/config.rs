use axum::http::HeaderValue;
use reqwest::Url;
use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_VAPI_API_URL: &str = "https://api.vapi.ai";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub backend_url: Url,
    pub cors_origin: HeaderValue,
    /// `None` when `VAPI_API_KEY` is unset; call initiation is then disabled
    pub voice: Option<VoiceConfig>,
}

#[derive(Clone, Debug)]
pub struct VoiceConfig {
    pub api_key: String,
    pub api_url: Url,
    pub assistant_id: String,
    pub phone_number_id: String,
    /// Number every check-in call dials
    pub customer_number: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let backend_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let backend_url = parse_url("BACKEND_URL", &backend_url)?;

        let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(&cors_origin)
            .map_err(|_| format!("CORS_ORIGIN is not a valid header value: {}", cors_origin))?;

        let voice = match env::var("VAPI_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => Some(VoiceConfig::from_env(api_key)?),
            _ => None,
        };

        Ok(Self {
            bind_addr,
            backend_url,
            cors_origin,
            voice,
        })
    }
}

impl VoiceConfig {
    fn from_env(api_key: String) -> Result<Self, String> {
        let api_url = env::var("VAPI_API_URL").unwrap_or_else(|_| DEFAULT_VAPI_API_URL.to_string());
        let api_url = parse_url("VAPI_API_URL", &api_url)?;

        let assistant_id = required("VAPI_ASSISTANT_ID")?;
        let phone_number_id = required("VAPI_PHONE_NUMBER_ID")?;
        let customer_number = required("VAPI_CUSTOMER_NUMBER")?;

        Ok(Self {
            api_key,
            api_url,
            assistant_id,
            phone_number_id,
            customer_number,
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set when VAPI_API_KEY is set", name))
}

fn parse_url(name: &str, value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", name, e))?;

    if url.cannot_be_a_base() {
        return Err(format!("{} must be an http(s) base URL", name));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_accepts_backend_default() {
        let url = parse_url("BACKEND_URL", DEFAULT_BACKEND_URL).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/");
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        assert!(parse_url("BACKEND_URL", "not a url").is_err());
        assert!(parse_url("BACKEND_URL", "mailto:someone@example.com").is_err());
    }
}
