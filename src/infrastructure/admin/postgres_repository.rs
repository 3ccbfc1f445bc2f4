//! PostgreSQL admin repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::admin::{Admin, AdminId, AdminRepository};
use crate::domain::DomainError;
use crate::infrastructure::database::{is_unique_violation, storage_error};

/// PostgreSQL implementation of AdminRepository
#[derive(Debug, Clone)]
pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn create(&self, email: &str, credential: &str) -> Result<Admin, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO admin (email, password)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(credential)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::conflict(format!("Email '{}' already registered", email))
            } else {
                storage_error("Failed to create admin", e)
            }
        })?;

        Ok(Admin::new(AdminId::new(id), email, credential))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        let row = sqlx::query("SELECT id, email, password FROM admin WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to get admin by email", e))?;

        Ok(row.as_ref().map(row_to_admin))
    }

    async fn update_credential(&self, id: AdminId, credential: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE admin SET password = $2 WHERE id = $1")
            .bind(id.value())
            .bind(credential)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to update admin credential", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("Admin '{}' not found", id)));
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Admin>, DomainError> {
        let rows = sqlx::query("SELECT id, email, password FROM admin ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list admins", e))?;

        Ok(rows.iter().map(row_to_admin).collect())
    }

    async fn delete(&self, id: AdminId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM admin WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete admin", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_admin(row: &sqlx::postgres::PgRow) -> Admin {
    let id: i64 = row.get("id");
    let email: String = row.get("email");
    let password: String = row.get("password");

    Admin::new(AdminId::new(id), email, password)
}
