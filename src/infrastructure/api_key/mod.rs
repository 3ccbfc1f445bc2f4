//! API Key infrastructure implementations
//!
//! This module provides key generation, the PostgreSQL repository and the
//! API key service.

mod generator;
mod postgres_repository;
mod service;

pub use generator::ApiKeyGenerator;
pub(crate) use postgres_repository::{out_of_date_to_status, status_to_out_of_date};
pub use postgres_repository::PostgresApiKeyRepository;
pub use service::ApiKeyService;
