//! Admin infrastructure module
//!
//! This module provides password hashing with Argon2, the PostgreSQL admin
//! repository and the admin service.

mod password;
mod postgres_repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresAdminRepository;
pub use service::AdminService;

#[cfg(test)]
pub(crate) use password::test_hasher;
