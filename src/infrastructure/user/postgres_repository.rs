//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::domain::api_key::{ApiKeyId, ApiKeyStatus};
use crate::domain::user::{NewUser, RegisteredUser, UserDeletion, UserId, UserRepository, UserView};
use crate::domain::{DomainError, RegistrationError};
use crate::infrastructure::api_key::{out_of_date_to_status, status_to_out_of_date};
use crate::infrastructure::database::{is_unique_violation, storage_error};

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn register(&self, user: &NewUser) -> Result<RegisteredUser, RegistrationError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RegistrationError::ApiKey(storage_error("Failed to begin registration", e)))?;

        let apikey_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO apikeys (apikey, out_of_date)
            VALUES ($1, $2)
            RETURNING apikey_id
            "#,
        )
        .bind(user.apikey())
        .bind(status_to_out_of_date(ApiKeyStatus::Active))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RegistrationError::ApiKey(DomainError::conflict("API key already exists"))
            } else {
                RegistrationError::ApiKey(storage_error("Failed to insert API key", e))
            }
        })?;

        let user_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (first_name, last_name, apikey_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(apikey_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RegistrationError::User(storage_error("Failed to insert user", e)))?;

        // Dropping `tx` on any early return above rolls back the key insert
        tx.commit()
            .await
            .map_err(|e| RegistrationError::User(storage_error("Failed to commit registration", e)))?;

        Ok(RegisteredUser {
            user_id: UserId::new(user_id),
            apikey_id: ApiKeyId::new(apikey_id),
            apikey: user.apikey().to_string(),
        })
    }

    async fn list(&self) -> Result<Vec<UserView>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT u.id, u.first_name, u.last_name, a.apikey_id, a.apikey, a.out_of_date
            FROM users u
            LEFT JOIN apikeys a ON u.apikey_id = a.apikey_id
            ORDER BY u.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to list users", e))?;

        let users = rows
            .iter()
            .map(|row| {
                let apikey_id: Option<i64> = row.get("apikey_id");
                let out_of_date: Option<bool> = row.get("out_of_date");

                UserView {
                    id: UserId::new(row.get("id")),
                    first_name: row.get("first_name"),
                    last_name: row.get("last_name"),
                    apikey_id: apikey_id.map(ApiKeyId::new),
                    apikey_value: row.get("apikey"),
                    status: out_of_date_to_status(out_of_date),
                }
            })
            .collect();

        Ok(users)
    }

    async fn delete(&self, id: UserId) -> Result<UserDeletion, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("Failed to begin user deletion", e))?;

        let apikey_id: Option<Option<i64>> =
            sqlx::query_scalar("DELETE FROM users WHERE id = $1 RETURNING apikey_id")
                .bind(id.value())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| storage_error("Failed to delete user", e))?;

        let user_removed = apikey_id.is_some();
        let mut apikey_removed = None;

        if let Some(Some(key_id)) = apikey_id {
            let result = sqlx::query("DELETE FROM apikeys WHERE apikey_id = $1")
                .bind(key_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| storage_error("Failed to delete API key", e))?;

            if result.rows_affected() > 0 {
                apikey_removed = Some(ApiKeyId::new(key_id));
            } else {
                debug!(user_id = %id, apikey_id = key_id, "Referenced API key already gone");
            }
        }

        tx.commit()
            .await
            .map_err(|e| storage_error("Failed to commit user deletion", e))?;

        Ok(UserDeletion {
            user_removed,
            apikey_removed,
        })
    }
}
