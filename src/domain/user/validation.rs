//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("first_name, last_name and apikey required")]
    MissingField(&'static str),
}

impl UserValidationError {
    /// Name of the first field found missing
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
        }
    }
}

/// Validate the fields of a registration
///
/// Rules:
/// - first name, last name and API key are all required
/// - whitespace-only values count as missing
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    apikey: &str,
) -> Result<(), UserValidationError> {
    for (field, value) in [
        ("first_name", first_name),
        ("last_name", last_name),
        ("apikey", apikey),
    ] {
        if value.trim().is_empty() {
            return Err(UserValidationError::MissingField(field));
        }
    }

    Ok(())
}
