//! User infrastructure module
//!
//! This module provides the PostgreSQL user repository and the user service
//! that drives registration, listing and deletion.

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use service::{RegisterUserRequest, UserService};
