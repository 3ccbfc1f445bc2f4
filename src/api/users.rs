//! End-user endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{RegistrationError, UserView};
use crate::infrastructure::user::RegisterUserRequest;

/// Registration body; absent fields are reported as validation failures
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub apikey: Option<String>,
}

impl From<RegisterRequest> for RegisterUserRequest {
    fn from(req: RegisterRequest) -> Self {
        Self {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            apikey: req.apikey.unwrap_or_default(),
        }
    }
}

/// Response for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub apikey: String,
}

/// Plain success acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// POST /register
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    debug!("Registering user");

    let registered = state
        .user_service
        .register(request.into())
        .await
        .map_err(registration_error)?;

    Ok(Json(RegisterResponse {
        success: true,
        message: "User and API key created".to_string(),
        apikey: registered.apikey,
    }))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserView>> {
    Json(state.user_service.list().await)
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    state.user_service.delete(&user_id).await.map_err(|e| {
        if e.is_internal() {
            error!(user_id = %user_id, error = %e, "Deleting user failed");
        }
        ApiError::bare()
    })?;

    Ok(Json(SuccessResponse { success: true }))
}

fn registration_error(err: RegistrationError) -> ApiError {
    match err {
        RegistrationError::Invalid(message) => ApiError::failure(message),
        RegistrationError::ApiKey(_) => {
            error!(error = %err, "Registration failed");
            ApiError::failure("DB error (apikey)")
        }
        RegistrationError::User(_) => {
            error!(error = %err, "Registration failed");
            ApiError::failure("DB error (user)")
        }
    }
}
