use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::admin;
use super::health;
use super::keys;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Keys
        .route("/generate-key", post(keys::generate_key))
        .route("/apikeys/{apikey_id}/toggle", post(keys::toggle_key))
        // Users
        .route("/register", post(users::register_user))
        .route("/users", get(users::list_users))
        .route("/users/{user_id}", delete(users::delete_user))
        // Admin API
        .merge(admin::create_admin_router())
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
