use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A client as listed by the backend's `GET /clients`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    pub client_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Patient {
    /// "First Last", the key the backend uses for history lookups
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
