//! keyhub
//!
//! API key issuance and management backend:
//! - Opaque random API keys bound to registered users
//! - Key status toggling (active/inactive)
//! - Administrator accounts with Argon2 credentials

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::PasswordConfig;
use infrastructure::{
    admin::{AdminService, Argon2Hasher, PostgresAdminRepository},
    api_key::{ApiKeyService, PostgresApiKeyRepository},
    storage::{InMemoryStore, StorageType},
    user::{PostgresUserRepository, UserService},
    Database,
};
use tracing::{info, warn};

/// Create the application state for the configured storage backend
///
/// Returns the database handle as well when PostgreSQL is used, so the
/// caller can close the pool on shutdown.
pub async fn create_app_state_with_config(
    config: &AppConfig,
) -> anyhow::Result<(AppState, Option<Database>)> {
    let storage_backend = StorageType::from_str(&config.storage.backend).unwrap_or_else(|| {
        warn!(
            backend = %config.storage.backend,
            "Unknown storage backend, using PostgreSQL"
        );
        StorageType::Postgres
    });

    info!("Storage backend: {:?}", storage_backend);

    match storage_backend {
        StorageType::InMemory => Ok((create_in_memory_app_state(&config.password)?, None)),
        StorageType::Postgres => {
            info!("Connecting to PostgreSQL...");
            let database = Database::connect(&config.database).await?;
            let state = create_postgres_app_state(&database, &config.password)?;

            Ok((state, Some(database)))
        }
    }
}

/// Create the application state backed by an open PostgreSQL pool
pub fn create_postgres_app_state(
    database: &Database,
    password: &PasswordConfig,
) -> anyhow::Result<AppState> {
    let pool = database.pool().clone();
    let hasher = Arc::new(Argon2Hasher::from_config(password)?);

    let api_key_repository = Arc::new(PostgresApiKeyRepository::new(pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let admin_repository = Arc::new(PostgresAdminRepository::new(pool));

    Ok(AppState {
        api_key_service: Arc::new(ApiKeyService::new(api_key_repository)),
        user_service: Arc::new(UserService::new(user_repository)),
        admin_service: Arc::new(AdminService::new(admin_repository, hasher)),
        store_probe: Arc::new(database.clone()),
    })
}

/// Create the application state backed by a fresh in-memory store
pub fn create_in_memory_app_state(password: &PasswordConfig) -> anyhow::Result<AppState> {
    let store = Arc::new(InMemoryStore::new());
    let hasher = Arc::new(Argon2Hasher::from_config(password)?);

    Ok(AppState {
        api_key_service: Arc::new(ApiKeyService::new(store.clone())),
        user_service: Arc::new(UserService::new(store.clone())),
        admin_service: Arc::new(AdminService::new(store.clone(), hasher)),
        store_probe: store,
    })
}
