use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A point of the mood line chart, from `GET /chart-data/{fullName}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}
