use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether the error originates below the domain (store or runtime failure)
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Internal { .. })
    }
}

/// Step of the registration workflow that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStage {
    ApiKey,
    User,
}

/// Errors raised while registering a user together with its API key
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Invalid registration: {0}")]
    Invalid(String),

    #[error("Failed to insert API key: {0}")]
    ApiKey(#[source] DomainError),

    #[error("Failed to insert user: {0}")]
    User(#[source] DomainError),
}

impl RegistrationError {
    /// The store step that failed, if the failure happened past validation
    pub fn stage(&self) -> Option<RegistrationStage> {
        match self {
            Self::Invalid(_) => None,
            Self::ApiKey(_) => Some(RegistrationStage::ApiKey),
            Self::User(_) => Some(RegistrationStage::User),
        }
    }

    /// The underlying store error, if any
    pub fn cause(&self) -> Option<&DomainError> {
        match self {
            Self::Invalid(_) => None,
            Self::ApiKey(e) | Self::User(e) => Some(e),
        }
    }
}
