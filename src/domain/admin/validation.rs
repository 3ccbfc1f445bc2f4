//! Admin validation utilities

use thiserror::Error;

/// Errors that can occur during admin validation
///
/// Registration and login report missing credentials with different
/// messages; clients match on both.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdminValidationError {
    #[error("Email and password required.")]
    MissingRegistrationCredentials,

    #[error("email & password required")]
    MissingLoginCredentials,
}

/// Validate the email/password pair of a new admin
pub fn validate_registration(email: &str, password: &str) -> Result<(), AdminValidationError> {
    if is_missing(email, password) {
        return Err(AdminValidationError::MissingRegistrationCredentials);
    }

    Ok(())
}

/// Validate the email/password pair of a login attempt
pub fn validate_login(email: &str, password: &str) -> Result<(), AdminValidationError> {
    if is_missing(email, password) {
        return Err(AdminValidationError::MissingLoginCredentials);
    }

    Ok(())
}

/// The email may not be whitespace only; the password is taken verbatim
fn is_missing(email: &str, password: &str) -> bool {
    email.trim().is_empty() || password.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        assert!(validate_registration("root@example.com", "secret").is_ok());
        assert!(validate_login("root@example.com", " ").is_ok());
    }

    #[test]
    fn test_missing_registration_credentials() {
        for (email, password) in [("", "secret"), ("   ", "secret"), ("root@example.com", "")] {
            assert_eq!(
                validate_registration(email, password),
                Err(AdminValidationError::MissingRegistrationCredentials)
            );
        }
    }

    #[test]
    fn test_missing_login_credentials() {
        assert_eq!(
            validate_login("", ""),
            Err(AdminValidationError::MissingLoginCredentials)
        );
    }

    #[test]
    fn test_messages_differ_by_action() {
        assert_eq!(
            AdminValidationError::MissingRegistrationCredentials.to_string(),
            "Email and password required."
        );
        assert_eq!(
            AdminValidationError::MissingLoginCredentials.to_string(),
            "email & password required"
        );
    }
}
