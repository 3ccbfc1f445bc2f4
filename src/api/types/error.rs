//! Error responses in the `{success: false, message}` envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Generic message returned for store and runtime failures
pub const STORE_FAILURE_MESSAGE: &str = "DB error";

/// Failure body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API error with status code
///
/// Most failures travel with HTTP 200; the status is only raised where a
/// client is expected to branch on it.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: Option<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                success: false,
                message,
            },
        }
    }

    /// Failure reported with HTTP 200
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, Some(message.into()))
    }

    /// Failure reported with HTTP 200 and no message
    pub fn bare() -> Self {
        Self::new(StatusCode::OK, None)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, Some(message.into()))
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, Some(message.into()))
    }

    pub fn message(&self) -> Option<&str> {
        self.response.message.as_deref()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                error!(error = %err, "Request failed");
                Self::failure(STORE_FAILURE_MESSAGE)
            }
            DomainError::NotFound { message }
            | DomainError::Validation { message }
            | DomainError::InvalidId { message }
            | DomainError::Credential { message }
            | DomainError::Conflict { message } => Self::failure(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.status,
            self.response.message.as_deref().unwrap_or("request failed")
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_uses_ok_status() {
        let err = ApiError::failure("Wrong password");
        assert_eq!(err.status, StatusCode::OK);
        assert!(!err.response.success);
        assert_eq!(err.message(), Some("Wrong password"));
    }

    #[test]
    fn test_bare_failure_omits_message() {
        let json = serde_json::to_string(&ApiError::bare().response).unwrap();
        assert_eq!(json, r#"{"success":false}"#);
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::not_found("Admin not found").into();
        assert_eq!(api_err.status, StatusCode::OK);
        assert_eq!(api_err.message(), Some("Admin not found"));
    }

    #[test]
    fn test_storage_error_detail_is_hidden() {
        let api_err: ApiError =
            DomainError::storage("relation \"admin\" does not exist").into();

        assert_eq!(api_err.message(), Some(STORE_FAILURE_MESSAGE));
        assert!(!api_err.to_string().contains("relation"));
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
        assert_eq!(ApiError::internal("").status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
