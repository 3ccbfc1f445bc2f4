//! User entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_registration, UserValidationError};
use crate::domain::api_key::{ApiKeyId, ApiKeyStatus};
use crate::domain::row_id::{parse_row_id, RowIdError};

/// User identifier, generated by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap an identifier read back from the store
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an identifier supplied by a caller
    pub fn parse(raw: &str) -> Result<Self, RowIdError> {
        parse_row_id("User", raw).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated registration: a user plus the key value to bind to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    first_name: String,
    last_name: String,
    apikey: String,
}

impl NewUser {
    /// Create a registration after validation
    ///
    /// Values are kept exactly as submitted; whitespace-only values count as
    /// missing.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        apikey: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let apikey = apikey.into();

        validate_registration(&first_name, &last_name, &apikey)?;

        Ok(Self {
            first_name,
            last_name,
            apikey,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn apikey(&self) -> &str {
        &self.apikey
    }
}

/// Outcome of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub user_id: UserId,
    pub apikey_id: ApiKeyId,
    pub apikey: String,
}

/// A user joined with its API key, as listed to administrators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub apikey_id: Option<ApiKeyId>,
    pub apikey_value: Option<String>,
    /// A user without a key reports the default status
    pub status: ApiKeyStatus,
}

/// What a user deletion removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserDeletion {
    pub user_removed: bool,
    pub apikey_removed: Option<ApiKeyId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_keeps_submitted_values() {
        let user = NewUser::new(" Ada ", "Lovelace\n", " deadbeef ").unwrap();
        assert_eq!(user.first_name(), " Ada ");
        assert_eq!(user.last_name(), "Lovelace\n");
        assert_eq!(user.apikey(), " deadbeef ");
    }

    #[test]
    fn test_new_user_requires_all_fields() {
        assert!(NewUser::new("Ada", "", "deadbeef").is_err());
        assert!(NewUser::new("Ada", "Lovelace", "   ").is_err());
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("12").unwrap(), UserId::new(12));
        assert!(UserId::parse("-1").is_err());
    }

    #[test]
    fn test_user_view_serialization() {
        let view = UserView {
            id: UserId::new(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            apikey_id: Some(ApiKeyId::new(3)),
            apikey_value: Some("deadbeef".to_string()),
            status: ApiKeyStatus::Inactive,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["apikey_id"], 3);
        assert_eq!(json["apikey_value"], "deadbeef");
        assert_eq!(json["status"], "inactive");
    }

    #[test]
    fn test_user_view_without_key() {
        let view = UserView {
            id: UserId::new(2),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            apikey_id: None,
            apikey_value: None,
            status: ApiKeyStatus::default(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["apikey_id"].is_null());
        assert!(json["apikey_value"].is_null());
        assert_eq!(json["status"], "active");
    }
}
