//! API key repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{ApiKeyId, ApiKeyStatus};
use crate::domain::DomainError;

/// Repository trait for API key storage
///
/// Keys are created and deleted together with their owning user (see
/// `UserRepository`); this trait only covers status changes.
#[async_trait]
pub trait ApiKeyRepository: Send + Sync + Debug {
    /// Flip the key's status atomically and return the new status
    ///
    /// Fails with `NotFound` if no key has the given ID.
    async fn toggle_status(&self, id: ApiKeyId) -> Result<ApiKeyStatus, DomainError>;
}
