//! Admin repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Admin, AdminId};
use crate::domain::DomainError;

/// Repository trait for admin storage
#[async_trait]
pub trait AdminRepository: Send + Sync + Debug {
    /// Create an admin with an already-prepared credential
    ///
    /// Fails with `Conflict` if the email is taken.
    async fn create(&self, email: &str, credential: &str) -> Result<Admin, DomainError>;

    /// Get an admin by email (for login)
    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError>;

    /// Replace the stored credential
    async fn update_credential(&self, id: AdminId, credential: &str) -> Result<(), DomainError>;

    /// List all admins ordered by ID
    async fn list(&self) -> Result<Vec<Admin>, DomainError>;

    /// Delete an admin; returns whether a row was removed
    async fn delete(&self, id: AdminId) -> Result<bool, DomainError>;
}
