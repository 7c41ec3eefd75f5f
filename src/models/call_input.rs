use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Input for starting an outbound voice check-in call
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StartCallInput {
    /// Assistant template variables, e.g. `{"clientName": "Jane"}`
    #[serde(default)]
    pub variable_values: HashMap<String, String>,
}
