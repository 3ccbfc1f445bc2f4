//! Identifiers generated by the relational store
//!
//! Every table keys its rows with a positive integer sequence. Identifiers
//! arriving from the outside (path segments) are parsed here before they
//! reach a repository.

use thiserror::Error;

/// Errors that can occur while parsing a row identifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowIdError {
    #[error("{0} ID cannot be empty")]
    Empty(&'static str),

    #[error("{kind} ID '{raw}' is not a positive integer")]
    NotPositiveInteger { kind: &'static str, raw: String },
}

/// Parse a positive integer row identifier
///
/// Leading/trailing whitespace is ignored; zero, negative numbers, fractions
/// and anything non-numeric are rejected.
pub fn parse_row_id(kind: &'static str, raw: &str) -> Result<i64, RowIdError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(RowIdError::Empty(kind));
    }

    match trimmed.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RowIdError::NotPositiveInteger {
            kind,
            raw: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert_eq!(parse_row_id("User", "1"), Ok(1));
        assert_eq!(parse_row_id("User", " 42 "), Ok(42));
        assert_eq!(parse_row_id("User", "9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn test_empty_id() {
        assert_eq!(parse_row_id("Admin", ""), Err(RowIdError::Empty("Admin")));
        assert_eq!(parse_row_id("Admin", "   "), Err(RowIdError::Empty("Admin")));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(parse_row_id("API key", "0").is_err());
        assert!(parse_row_id("API key", "-3").is_err());
    }

    #[test]
    fn test_rejects_non_integer() {
        assert!(parse_row_id("API key", "abc").is_err());
        assert!(parse_row_id("API key", "1.5").is_err());
        assert!(parse_row_id("API key", "99999999999999999999").is_err());

        let err = parse_row_id("API key", "abc").unwrap_err();
        assert_eq!(err.to_string(), "API key ID 'abc' is not a positive integer");
    }
}
