//! Admin registration and login endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{AdminSummary, DomainError};

/// Credentials body shared by register and login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn parts(&self) -> (&str, &str) {
        (
            self.email.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
        )
    }
}

/// Response for a successful admin registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAdminResponse {
    pub success: bool,
    pub message: String,
}

/// Response for a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub admin: AdminSummary,
}

/// POST /admin/register
pub async fn register_admin(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<RegisterAdminResponse>, ApiError> {
    let (email, password) = request.parts();

    debug!(email = %email, "Registering admin");

    state
        .admin_service
        .register(email, password)
        .await
        .map_err(|e| match e {
            DomainError::Validation { message } => ApiError::failure(message),
            other => {
                if other.is_internal() {
                    error!(error = %other, "Admin registration failed");
                }
                ApiError::failure("Email already registered or error")
            }
        })?;

    Ok(Json(RegisterAdminResponse {
        success: true,
        message: "Admin registered.".to_string(),
    }))
}

/// POST /admin/login
pub async fn login_admin(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = request.parts();

    debug!(email = %email, "Admin login attempt");

    let admin = state.admin_service.login(email, password).await?;

    Ok(Json(LoginResponse {
        success: true,
        admin,
    }))
}
