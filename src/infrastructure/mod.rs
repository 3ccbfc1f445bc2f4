//! Infrastructure layer - Store, hashing and runtime implementations

pub mod admin;
pub mod api_key;
pub mod database;
pub mod logging;
pub mod storage;
pub mod user;

pub use database::Database;
