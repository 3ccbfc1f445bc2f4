//! Admin entity and related types

use serde::{Deserialize, Serialize};

use crate::domain::row_id::{parse_row_id, RowIdError};

/// Prefix carried by every hashed credential (PHC string of an Argon2 hash)
///
/// Stored credentials without it are legacy plaintext.
pub const HASHED_CREDENTIAL_MARKER: &str = "$argon2";

/// Admin identifier, generated by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(i64);

impl AdminId {
    /// Wrap an identifier read back from the store
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an identifier supplied by a caller
    pub fn parse(raw: &str) -> Result<Self, RowIdError> {
        parse_row_id("Admin", raw).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AdminId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Admin account as stored
#[derive(Clone)]
pub struct Admin {
    id: AdminId,
    email: String,
    /// Password hash, or legacy plaintext awaiting migration
    credential: String,
}

impl Admin {
    pub fn new(id: AdminId, email: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            credential: credential.into(),
        }
    }

    pub fn id(&self) -> AdminId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Whether the stored credential is already a hash
    pub fn has_hashed_credential(&self) -> bool {
        self.credential.starts_with(HASHED_CREDENTIAL_MARKER)
    }

    pub fn set_credential(&mut self, credential: impl Into<String>) {
        self.credential = credential.into();
    }

    pub fn summary(&self) -> AdminSummary {
        AdminSummary {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

impl std::fmt::Debug for Admin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("credential", &"[REDACTED]")
            .finish()
    }
}

/// Public view of an admin, never carrying the credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub id: AdminId,
    pub email: String,
}
