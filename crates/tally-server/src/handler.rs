use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use tally_ledger::{require_value, ParsedId};

use crate::dto::{AddRequest, AddResponse, HealthResponse, MessageResponse, SumResponse};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// serde_json writes NaN and infinities as `null`; refuse them instead.
fn finite(value: f64) -> ServerResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ServerError::NonFiniteNumber(value))
    }
}

/// Record a new value.
///
/// The body is decoded as JSON regardless of its `Content-Type`.
pub async fn add_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<AddResponse>)> {
    let request: AddRequest =
        serde_json::from_slice(&body).map_err(|e| ServerError::InvalidBody(e.to_string()))?;
    let value = require_value(request.value)?;
    let entry = state.ledger.add(value)?;

    Ok((
        StatusCode::CREATED,
        Json(AddResponse {
            id: entry.id,
            timestamp: entry.timestamp,
        }),
    ))
}

/// Current running sum.
pub async fn sum_handler(State(state): State<AppState>) -> ServerResult<Json<SumResponse>> {
    Ok(Json(SumResponse {
        sum: finite(state.ledger.sum()?)?,
    }))
}

/// Every stored entry.
pub async fn history_handler(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    let entries = state.ledger.history()?;
    for entry in &entries {
        finite(entry.value)?;
    }
    let history = serde_json::to_value(&entries)?;
    Ok(Json(json!({ "history": history })))
}

/// Remove an entry by id.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<MessageResponse>> {
    let id = raw_id.parse::<ParsedId>()?.resolve()?;
    state.ledger.delete(id)?;

    Ok(Json(MessageResponse {
        message: "Value removed successfully.".into(),
    }))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
