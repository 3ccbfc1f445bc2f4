//! Admin API endpoints

pub mod accounts;
pub mod auth;

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::state::AppState;

/// Create admin API router
///
/// Routes carry their full `/admin` prefix so the router can be merged.
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(accounts::list_admins))
        .route("/admin/register", post(auth::register_admin))
        .route("/admin/login", post(auth::login_admin))
        .route("/admin/{admin_id}", delete(accounts::delete_admin))
}
