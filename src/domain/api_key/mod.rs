//! API key domain
//!
//! An API key is an opaque random credential owned by exactly one user,
//! carrying an active/inactive status.

mod entity;
mod repository;

pub use entity::{ApiKey, ApiKeyId, ApiKeyStatus};
pub use repository::ApiKeyRepository;
