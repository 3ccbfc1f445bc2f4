//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, RegisteredUser, UserDeletion, UserId, UserView};
use crate::domain::{DomainError, RegistrationError};

/// Repository trait for users and the keys bound to them
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Insert the API key row, then the user row referencing it
    ///
    /// Both rows are written or neither is. The error reports which insert
    /// failed.
    async fn register(&self, user: &NewUser) -> Result<RegisteredUser, RegistrationError>;

    /// List every user joined with its key, ordered by user ID
    async fn list(&self) -> Result<Vec<UserView>, DomainError>;

    /// Delete a user and the key it references
    ///
    /// Deleting an unknown user, or a user whose key row is already gone,
    /// is not an error.
    async fn delete(&self, id: UserId) -> Result<UserDeletion, DomainError>;
}
