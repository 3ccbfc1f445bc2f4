//! Admin domain
//!
//! Administrators are operator accounts identified by email and password.

mod entity;
mod repository;
mod validation;

pub use entity::{Admin, AdminId, AdminSummary, HASHED_CREDENTIAL_MARKER};
pub use repository::AdminRepository;
pub use validation::{validate_login, validate_registration, AdminValidationError};
