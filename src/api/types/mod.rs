//! Request and response types shared by the handlers

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, STORE_FAILURE_MESSAGE};
pub use json::Json;
