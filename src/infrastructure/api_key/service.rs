//! API Key service
//!
//! Provides key generation and status changes.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::api_key::{ApiKeyId, ApiKeyRepository, ApiKeyStatus};
use crate::domain::DomainError;

use super::generator::ApiKeyGenerator;

/// API Key service for issuing and toggling API keys
#[derive(Debug)]
pub struct ApiKeyService<R>
where
    R: ApiKeyRepository,
{
    repository: Arc<R>,
    generator: ApiKeyGenerator,
}

impl<R: ApiKeyRepository> ApiKeyService<R> {
    /// Create a new API key service
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            generator: ApiKeyGenerator::new(),
        }
    }

    /// Generate a fresh key value; nothing is stored until registration
    pub fn generate(&self) -> String {
        debug!("Generating API key");
        self.generator.generate()
    }

    /// Flip a key between active and inactive, returning the new status
    pub async fn toggle(&self, id: &str) -> Result<ApiKeyStatus, DomainError> {
        let key_id = ApiKeyId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let status = self.repository.toggle_status(key_id).await?;

        info!(apikey_id = %key_id, status = %status, "API key status toggled");

        Ok(status)
    }
}
