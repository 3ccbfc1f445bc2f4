//! API key entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::row_id::{parse_row_id, RowIdError};

/// API key identifier, generated by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKeyId(i64);

impl ApiKeyId {
    /// Wrap an identifier read back from the store
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an identifier supplied by a caller
    pub fn parse(raw: &str) -> Result<Self, RowIdError> {
        parse_row_id("API key", raw).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ApiKeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyStatus {
    #[default]
    Active,
    Inactive,
}

impl ApiKeyStatus {
    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ApiKeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API key as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    id: ApiKeyId,
    value: String,
    status: ApiKeyStatus,
}

impl ApiKey {
    pub fn new(id: ApiKeyId, value: impl Into<String>, status: ApiKeyStatus) -> Self {
        Self {
            id,
            value: value.into(),
            status,
        }
    }

    pub fn id(&self) -> ApiKeyId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status(&self) -> ApiKeyStatus {
        self.status
    }

    /// Flip the status and return the new one
    pub fn toggle(&mut self) -> ApiKeyStatus {
        self.status = self.status.toggled();
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(ApiKeyId::parse("7").unwrap().value(), 7);
        assert!(ApiKeyId::parse("0").is_err());
        assert!(ApiKeyId::parse("seven").is_err());
    }

    #[test]
    fn test_status_toggle_is_involution() {
        for status in [ApiKeyStatus::Active, ApiKeyStatus::Inactive] {
            assert_ne!(status.toggled(), status);
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ApiKeyStatus::default(), ApiKeyStatus::Active);
        assert_eq!(ApiKeyStatus::Active.to_string(), "active");
        assert_eq!(ApiKeyStatus::Inactive.to_string(), "inactive");
        assert_eq!(
            serde_json::to_string(&ApiKeyStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn test_api_key_toggle() {
        let mut key = ApiKey::new(ApiKeyId::new(1), "abc", ApiKeyStatus::Active);

        assert_eq!(key.toggle(), ApiKeyStatus::Inactive);
        assert_eq!(key.status(), ApiKeyStatus::Inactive);
        assert_eq!(key.toggle(), ApiKeyStatus::Active);
        assert_eq!(key.value(), "abc");
    }
}
