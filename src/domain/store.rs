//! Store connectivity probe

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Lightweight check that the backing store answers queries
#[async_trait]
pub trait StoreProbe: Send + Sync + Debug {
    async fn ping(&self) -> Result<(), DomainError>;
}
