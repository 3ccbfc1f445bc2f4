//! User service for registration, listing and deletion

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::user::{NewUser, RegisteredUser, UserId, UserRepository, UserView};
use crate::domain::{DomainError, RegistrationError};

/// Request for registering a user with an API key
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub apikey: String,
}

/// User service for end-user management
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a user bound to the given API key
    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisteredUser, RegistrationError> {
        let user = NewUser::new(request.first_name, request.last_name, request.apikey)
            .map_err(|e| {
                debug!(field = e.field(), "Registration rejected");
                RegistrationError::Invalid(e.to_string())
            })?;

        let registered = self.repository.register(&user).await?;

        info!(
            user_id = %registered.user_id,
            apikey_id = %registered.apikey_id,
            "User registered"
        );

        Ok(registered)
    }

    /// List users with their keys
    ///
    /// A store failure is logged and yields an empty list.
    pub async fn list(&self) -> Vec<UserView> {
        match self.repository.list().await {
            Ok(users) => users,
            Err(e) => {
                warn!(error = %e, "Listing users failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Delete a user together with its key
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let user_id = UserId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let deletion = self.repository.delete(user_id).await?;

        info!(
            user_id = %user_id,
            user_removed = deletion.user_removed,
            apikey_removed = ?deletion.apikey_removed.map(|k| k.value()),
            "User deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api_key::{ApiKeyRepository, ApiKeyStatus};
    use crate::domain::RegistrationStage;
    use crate::infrastructure::storage::InMemoryStore;

    const KEY: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

    fn create_service() -> (UserService<InMemoryStore>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (UserService::new(store.clone()), store)
    }

    fn make_request(first_name: &str, last_name: &str, apikey: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            apikey: apikey.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_list() {
        let (service, _) = create_service();

        let registered = service
            .register(make_request("Ada", "Lovelace", KEY))
            .await
            .unwrap();
        assert_eq!(registered.apikey, KEY);

        let users = service.list().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, registered.user_id);
        assert_eq!(users[0].apikey_id, Some(registered.apikey_id));
        assert_eq!(users[0].apikey_value.as_deref(), Some(KEY));
        assert_eq!(users[0].status, ApiKeyStatus::Active);
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let (service, store) = create_service();

        let result = service.register(make_request("Ada", "", KEY)).await;
        assert!(matches!(result, Err(RegistrationError::Invalid(_))));

        // Nothing touched the store
        assert_eq!(store.apikey_count().await, 0);
    }

    #[tokio::test]
    async fn test_register_duplicate_key() {
        let (service, _) = create_service();

        service
            .register(make_request("Ada", "Lovelace", KEY))
            .await
            .unwrap();

        let err = service
            .register(make_request("Grace", "Hopper", KEY))
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(RegistrationStage::ApiKey));
        assert!(matches!(err.cause(), Some(DomainError::Conflict { .. })));
        assert_eq!(service.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_register_user_insert_failure_rolls_back_key() {
        let (service, store) = create_service();
        store.set_fail_user_inserts(true).await;

        let err = service
            .register(make_request("Ada", "Lovelace", KEY))
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(RegistrationStage::User));
        assert_eq!(store.apikey_count().await, 0);
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_degrades_to_empty_on_store_error() {
        let (service, store) = create_service();

        service
            .register(make_request("Ada", "Lovelace", KEY))
            .await
            .unwrap();
        store.set_should_fail(true).await;

        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_ordered_by_id() {
        let (service, _) = create_service();

        for (i, name) in ["Ada", "Grace", "Barbara"].iter().enumerate() {
            service
                .register(make_request(name, "Tester", &format!("key-{}", i)))
                .await
                .unwrap();
        }

        let ids: Vec<i64> = service.list().await.iter().map(|u| u.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_removes_user_and_key() {
        let (service, store) = create_service();

        let registered = service
            .register(make_request("Ada", "Lovelace", KEY))
            .await
            .unwrap();

        service
            .delete(&registered.user_id.to_string())
            .await
            .unwrap();

        assert!(service.list().await.is_empty());
        assert!(store.apikey_status(registered.apikey_id).await.is_none());
        assert_eq!(store.apikey_count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_user_succeeds() {
        let (service, _) = create_service();

        assert!(service.delete("42").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_with_missing_key_succeeds() {
        let (service, store) = create_service();

        let registered = service
            .register(make_request("Ada", "Lovelace", KEY))
            .await
            .unwrap();
        store.remove_apikey_row(registered.apikey_id).await;

        assert!(service.delete(&registered.user_id.to_string()).await.is_ok());
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_invalid_id() {
        let (service, _) = create_service();

        for id in ["0", "abc", "-5"] {
            let result = service.delete(id).await;
            assert!(matches!(result, Err(DomainError::InvalidId { .. })));
        }
    }

    #[tokio::test]
    async fn test_delete_storage_failure() {
        let (service, store) = create_service();
        store.set_should_fail(true).await;

        let result = service.delete("1").await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
