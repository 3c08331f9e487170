use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use tally_ledger::LedgerError;

use crate::dto::ErrorResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cannot encode {0} as a JSON number")]
    NonFiniteNumber(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Ledger(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            Self::Ledger(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client.
    fn public_message(&self) -> String {
        match self {
            Self::InvalidBody(_)
            | Self::Ledger(LedgerError::MissingValue)
            | Self::Ledger(LedgerError::ZeroValue(_)) => "A numeric value is required.".into(),
            Self::Ledger(LedgerError::InvalidId(_)) => "Invalid ID.".into(),
            Self::Ledger(e) if e.is_not_found() => "ID not found.".into(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_request() {
        assert_eq!(ServerError::from(LedgerError::ZeroValue(0.0)).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::from(LedgerError::MissingValue).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServerError::from(LedgerError::InvalidId("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServerError::InvalidBody("eof".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_entries_are_not_found() {
        assert_eq!(
            ServerError::from(LedgerError::NotFound(3)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ServerError::from(LedgerError::NotFound(-1)).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_failures_are_server_errors() {
        assert_eq!(
            ServerError::from(LedgerError::LockPoisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::NonFiniteNumber(f64::INFINITY).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn public_messages() {
        assert_eq!(
            ServerError::InvalidBody("eof".into()).public_message(),
            "A numeric value is required."
        );
        assert_eq!(
            ServerError::from(LedgerError::InvalidId("abc".into())).public_message(),
            "Invalid ID."
        );
        assert_eq!(
            ServerError::from(LedgerError::NotFound(1)).public_message(),
            "ID not found."
        );
    }
}
