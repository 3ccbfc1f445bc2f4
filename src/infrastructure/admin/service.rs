//! Admin service for registration, login and account management

use std::sync::Arc;

use tokio::task;
use tracing::{info, warn};

use crate::domain::admin::{
    validate_login, validate_registration, AdminId, AdminRepository, AdminSummary,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Admin service for authentication and management
#[derive(Debug)]
pub struct AdminService<R: AdminRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AdminRepository, H: PasswordHasher + 'static> AdminService<R, H> {
    /// Create a new admin service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new admin
    pub async fn register(&self, email: &str, password: &str) -> Result<AdminSummary, DomainError> {
        validate_registration(email, password).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hash(password).await?;
        let admin = self.repository.create(email, &password_hash).await?;

        info!(admin_id = %admin.id(), "Admin registered");

        Ok(admin.summary())
    }

    /// Authenticate an admin with email and password
    ///
    /// A credential still stored as plaintext is hashed and written back
    /// before the comparison.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminSummary, DomainError> {
        validate_login(email, password).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut admin = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("Admin not found"))?;

        if !admin.has_hashed_credential() {
            let migrated = self.hash(admin.credential()).await?;

            match self.repository.update_credential(admin.id(), &migrated).await {
                Ok(()) => info!(admin_id = %admin.id(), "Migrated plaintext admin credential"),
                Err(e) => warn!(
                    admin_id = %admin.id(),
                    error = %e,
                    "Failed to persist migrated admin credential"
                ),
            }

            admin.set_credential(migrated);
        }

        if !self.verify(password, admin.credential()).await? {
            return Err(DomainError::credential("Wrong password"));
        }

        info!(admin_id = %admin.id(), "Admin logged in");

        Ok(admin.summary())
    }

    /// List all admins
    pub async fn list(&self) -> Result<Vec<AdminSummary>, DomainError> {
        let admins = self.repository.list().await?;
        Ok(admins.iter().map(|a| a.summary()).collect())
    }

    /// Delete an admin
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let admin_id = AdminId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if !self.repository.delete(admin_id).await? {
            return Err(DomainError::not_found(format!("Admin '{}' not found", admin_id)));
        }

        info!(admin_id = %admin_id, "Admin deleted");

        Ok(())
    }

    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let hash = hash.to_string();

        task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::admin::password::{test_hasher, Argon2Hasher};
    use crate::infrastructure::storage::InMemoryStore;

    fn create_service() -> (AdminService<InMemoryStore, Argon2Hasher>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let service = AdminService::new(store.clone(), Arc::new(test_hasher()));
        (service, store)
    }

    #[tokio::test]
    async fn test_register_stores_hash() {
        let (service, store) = create_service();

        let summary = service.register("root@example.com", "s3cret").await.unwrap();
        assert_eq!(summary.email, "root@example.com");

        let stored = store.get_by_email("root@example.com").await.unwrap().unwrap();
        assert!(stored.has_hashed_credential());
        assert_ne!(stored.credential(), "s3cret");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (service, _) = create_service();

        service.register("root@example.com", "s3cret").await.unwrap();
        let result = service.register("root@example.com", "other").await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let (service, _) = create_service();

        match service.register("", "s3cret").await {
            Err(DomainError::Validation { message }) => {
                assert_eq!(message, "Email and password required.")
            }
            other => panic!("Expected validation error, got {:?}", other),
        }

        let result = service.register("root@example.com", "").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_login_success() {
        let (service, _) = create_service();

        let registered = service.register("root@example.com", "s3cret").await.unwrap();
        let summary = service.login("root@example.com", "s3cret").await.unwrap();

        assert_eq!(summary, registered);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (service, _) = create_service();

        service.register("root@example.com", "s3cret").await.unwrap();
        let result = service.login("root@example.com", "guess").await;

        match result {
            Err(DomainError::Credential { message }) => assert_eq!(message, "Wrong password"),
            other => panic!("Expected credential error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_unknown_admin() {
        let (service, _) = create_service();

        let result = service.login("nobody@example.com", "s3cret").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_login_migrates_plaintext_credential() {
        let (service, store) = create_service();

        store.create("legacy@example.com", "hunter2").await.unwrap();

        let summary = service.login("legacy@example.com", "hunter2").await.unwrap();
        assert_eq!(summary.email, "legacy@example.com");

        let stored = store.get_by_email("legacy@example.com").await.unwrap().unwrap();
        assert!(stored.has_hashed_credential());

        // The migrated hash keeps working
        assert!(service.login("legacy@example.com", "hunter2").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_plaintext_wrong_password_still_migrates() {
        let (service, store) = create_service();

        store.create("legacy@example.com", "hunter2").await.unwrap();

        let result = service.login("legacy@example.com", "guess").await;
        assert!(matches!(result, Err(DomainError::Credential { .. })));

        let stored = store.get_by_email("legacy@example.com").await.unwrap().unwrap();
        assert!(stored.has_hashed_credential());
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let (service, _) = create_service();

        let first = service.register("a@example.com", "pw").await.unwrap();
        service.register("b@example.com", "pw").await.unwrap();

        let admins = service.list().await.unwrap();
        assert_eq!(admins.len(), 2);
        assert_eq!(admins[0].email, "a@example.com");

        service.delete(&first.id.to_string()).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_admin() {
        let (service, _) = create_service();

        let result = service.delete("99").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_invalid_id() {
        let (service, _) = create_service();

        let result = service.delete("root").await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_delete_storage_failure() {
        let (service, store) = create_service();
        store.set_should_fail(true).await;

        let result = service.delete("1").await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
