//! Request and response bodies for the Tally HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_ledger::EntryId;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const ADD: &str = "/sum/add";
    pub const SUM: &str = "/sum";
    pub const HISTORY: &str = "/sum/history";
    pub const DELETE: &str = "/sum/delete/:id";
    pub const HEALTH: &str = "/health";
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub id: EntryId,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SumResponse {
    pub sum: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
