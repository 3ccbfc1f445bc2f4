//! API key endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::ApiKeyStatus;

/// Response carrying a freshly generated key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateKeyResponse {
    pub success: bool,
    pub apikey: String,
}

/// Response for a status toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleKeyResponse {
    pub success: bool,
    pub new_status: ApiKeyStatus,
}

/// POST /generate-key
pub async fn generate_key(State(state): State<AppState>) -> Json<GenerateKeyResponse> {
    debug!("Generating API key");

    Json(GenerateKeyResponse {
        success: true,
        apikey: state.api_key_service.generate(),
    })
}

/// POST /apikeys/{id}/toggle
pub async fn toggle_key(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<Json<ToggleKeyResponse>, ApiError> {
    debug!(apikey_id = %key_id, "Toggling API key status");

    let new_status = state.api_key_service.toggle(&key_id).await.map_err(|e| {
        if e.is_internal() {
            error!(apikey_id = %key_id, error = %e, "Toggling API key failed");
        } else {
            debug!(apikey_id = %key_id, error = %e, "Toggle rejected");
        }
        ApiError::bare()
    })?;

    Ok(Json(ToggleKeyResponse {
        success: true,
        new_status,
    }))
}
