//! Admin account listing and deletion

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, STORE_FAILURE_MESSAGE};
use crate::domain::{AdminSummary, DomainError};

/// Response for a deleted admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAdminResponse {
    pub message: String,
}

/// GET /admin
pub async fn list_admins(State(state): State<AppState>) -> Result<Json<Vec<AdminSummary>>, ApiError> {
    debug!("Listing admins");

    let admins = state.admin_service.list().await.map_err(|e| {
        error!(error = %e, "Listing admins failed");
        ApiError::internal(STORE_FAILURE_MESSAGE)
    })?;

    Ok(Json(admins))
}

/// DELETE /admin/{id}
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
) -> Result<Json<DeleteAdminResponse>, ApiError> {
    debug!(admin_id = %admin_id, "Deleting admin");

    state
        .admin_service
        .delete(&admin_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => ApiError::not_found("Admin not found"),
            DomainError::InvalidId { message } => ApiError::failure(message),
            other => {
                error!(admin_id = %admin_id, error = %other, "Deleting admin failed");
                ApiError::internal(STORE_FAILURE_MESSAGE)
            }
        })?;

    Ok(Json(DeleteAdminResponse {
        message: "Admin deleted".to_string(),
    }))
}
