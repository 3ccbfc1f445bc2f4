//! PostgreSQL API key repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::api_key::{ApiKeyId, ApiKeyRepository, ApiKeyStatus};
use crate::domain::DomainError;
use crate::infrastructure::database::storage_error;

/// PostgreSQL implementation of ApiKeyRepository
#[derive(Debug, Clone)]
pub struct PostgresApiKeyRepository {
    pool: PgPool,
}

impl PostgresApiKeyRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApiKeyRepository for PostgresApiKeyRepository {
    async fn toggle_status(&self, id: ApiKeyId) -> Result<ApiKeyStatus, DomainError> {
        // Single statement, so concurrent toggles serialize on the row lock
        let out_of_date: Option<bool> = sqlx::query_scalar(
            r#"
            UPDATE apikeys
            SET out_of_date = NOT out_of_date
            WHERE apikey_id = $1
            RETURNING out_of_date
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to toggle API key", e))?;

        match out_of_date {
            Some(flag) => Ok(out_of_date_to_status(Some(flag))),
            None => Err(DomainError::not_found(format!("API key '{}' not found", id))),
        }
    }
}

/// Map the `out_of_date` column to a status; a missing flag reads as active
pub(crate) fn out_of_date_to_status(out_of_date: Option<bool>) -> ApiKeyStatus {
    match out_of_date {
        Some(true) => ApiKeyStatus::Inactive,
        Some(false) | None => ApiKeyStatus::Active,
    }
}

/// Map a status to the `out_of_date` column
pub(crate) fn status_to_out_of_date(status: ApiKeyStatus) -> bool {
    match status {
        ApiKeyStatus::Active => false,
        ApiKeyStatus::Inactive => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion() {
        assert!(!status_to_out_of_date(ApiKeyStatus::Active));
        assert!(status_to_out_of_date(ApiKeyStatus::Inactive));

        assert_eq!(out_of_date_to_status(Some(false)), ApiKeyStatus::Active);
        assert_eq!(out_of_date_to_status(Some(true)), ApiKeyStatus::Inactive);
        assert_eq!(out_of_date_to_status(None), ApiKeyStatus::Active);
    }
}
