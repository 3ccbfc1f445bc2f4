//! In-memory store implementing every repository trait
//!
//! All three tables live behind one lock, so each repository call is atomic
//! the way a database transaction would be. Identifiers come from per-table
//! sequences starting at 1.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::admin::{Admin, AdminId, AdminRepository};
use crate::domain::api_key::{ApiKey, ApiKeyId, ApiKeyRepository, ApiKeyStatus};
use crate::domain::user::{NewUser, RegisteredUser, UserDeletion, UserId, UserRepository, UserView};
use crate::domain::{DomainError, RegistrationError, StoreProbe};

#[derive(Debug, Clone)]
struct UserRow {
    first_name: String,
    last_name: String,
    apikey_id: Option<ApiKeyId>,
}

#[derive(Debug, Default)]
struct Tables {
    apikeys: BTreeMap<ApiKeyId, ApiKey>,
    users: BTreeMap<UserId, UserRow>,
    admins: BTreeMap<AdminId, Admin>,
    apikey_seq: i64,
    user_seq: i64,
    admin_seq: i64,
}

impl Tables {
    fn next_apikey_id(&mut self) -> ApiKeyId {
        self.apikey_seq += 1;
        ApiKeyId::new(self.apikey_seq)
    }

    fn next_user_id(&mut self) -> UserId {
        self.user_seq += 1;
        UserId::new(self.user_seq)
    }

    fn next_admin_id(&mut self) -> AdminId {
        self.admin_seq += 1;
        AdminId::new(self.admin_seq)
    }
}

/// In-memory implementation of the user, API key and admin repositories
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    should_fail: Arc<RwLock<bool>>,
    fail_user_inserts: Arc<RwLock<bool>>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail with a storage error
    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    /// Make the user insert of a registration fail after the key insert
    pub async fn set_fail_user_inserts(&self, fail: bool) {
        *self.fail_user_inserts.write().await = fail;
    }

    /// Number of API key rows currently stored
    pub async fn apikey_count(&self) -> usize {
        self.tables.read().await.apikeys.len()
    }

    /// Status of a stored key, if the row exists
    pub async fn apikey_status(&self, id: ApiKeyId) -> Option<ApiKeyStatus> {
        self.tables.read().await.apikeys.get(&id).map(ApiKey::status)
    }

    /// Remove a key row behind its user's back, leaving a dangling reference
    pub async fn remove_apikey_row(&self, id: ApiKeyId) -> bool {
        self.tables.write().await.apikeys.remove(&id).is_some()
    }

    async fn check_should_fail(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::storage("In-memory store configured to fail"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn register(&self, user: &NewUser) -> Result<RegisteredUser, RegistrationError> {
        self.check_should_fail()
            .await
            .map_err(RegistrationError::ApiKey)?;

        let fail_user_insert = *self.fail_user_inserts.read().await;
        let mut tables = self.tables.write().await;

        if tables.apikeys.values().any(|k| k.value() == user.apikey()) {
            return Err(RegistrationError::ApiKey(DomainError::conflict(
                "API key already exists",
            )));
        }

        if fail_user_insert {
            // The key row is never written, which is what a rollback leaves behind
            return Err(RegistrationError::User(DomainError::storage(
                "In-memory store configured to fail user inserts",
            )));
        }

        let apikey_id = tables.next_apikey_id();
        tables.apikeys.insert(
            apikey_id,
            ApiKey::new(apikey_id, user.apikey(), ApiKeyStatus::Active),
        );

        let user_id = tables.next_user_id();
        tables.users.insert(
            user_id,
            UserRow {
                first_name: user.first_name().to_string(),
                last_name: user.last_name().to_string(),
                apikey_id: Some(apikey_id),
            },
        );

        Ok(RegisteredUser {
            user_id,
            apikey_id,
            apikey: user.apikey().to_string(),
        })
    }

    async fn list(&self) -> Result<Vec<UserView>, DomainError> {
        self.check_should_fail().await?;
        let tables = self.tables.read().await;

        let users = tables
            .users
            .iter()
            .map(|(id, row)| {
                let key = row.apikey_id.and_then(|k| tables.apikeys.get(&k));

                UserView {
                    id: *id,
                    first_name: row.first_name.clone(),
                    last_name: row.last_name.clone(),
                    apikey_id: key.map(ApiKey::id),
                    apikey_value: key.map(|k| k.value().to_string()),
                    status: key.map(ApiKey::status).unwrap_or_default(),
                }
            })
            .collect();

        Ok(users)
    }

    async fn delete(&self, id: UserId) -> Result<UserDeletion, DomainError> {
        self.check_should_fail().await?;
        let mut tables = self.tables.write().await;

        let Some(row) = tables.users.remove(&id) else {
            return Ok(UserDeletion::default());
        };

        let apikey_removed = row
            .apikey_id
            .filter(|key_id| tables.apikeys.remove(key_id).is_some());

        Ok(UserDeletion {
            user_removed: true,
            apikey_removed,
        })
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryStore {
    async fn toggle_status(&self, id: ApiKeyId) -> Result<ApiKeyStatus, DomainError> {
        self.check_should_fail().await?;
        let mut tables = self.tables.write().await;

        tables
            .apikeys
            .get_mut(&id)
            .map(ApiKey::toggle)
            .ok_or_else(|| DomainError::not_found(format!("API key '{}' not found", id)))
    }
}

#[async_trait]
impl AdminRepository for InMemoryStore {
    async fn create(&self, email: &str, credential: &str) -> Result<Admin, DomainError> {
        self.check_should_fail().await?;
        let mut tables = self.tables.write().await;

        if tables.admins.values().any(|a| a.email() == email) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already registered",
                email
            )));
        }

        let id = tables.next_admin_id();
        let admin = Admin::new(id, email, credential);
        tables.admins.insert(id, admin.clone());

        Ok(admin)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        self.check_should_fail().await?;
        let tables = self.tables.read().await;
        Ok(tables.admins.values().find(|a| a.email() == email).cloned())
    }

    async fn update_credential(&self, id: AdminId, credential: &str) -> Result<(), DomainError> {
        self.check_should_fail().await?;
        let mut tables = self.tables.write().await;

        match tables.admins.get_mut(&id) {
            Some(admin) => {
                admin.set_credential(credential);
                Ok(())
            }
            None => Err(DomainError::not_found(format!("Admin '{}' not found", id))),
        }
    }

    async fn list(&self) -> Result<Vec<Admin>, DomainError> {
        self.check_should_fail().await?;
        let tables = self.tables.read().await;
        Ok(tables.admins.values().cloned().collect())
    }

    async fn delete(&self, id: AdminId) -> Result<bool, DomainError> {
        self.check_should_fail().await?;
        let mut tables = self.tables.write().await;
        Ok(tables.admins.remove(&id).is_some())
    }
}

#[async_trait]
impl StoreProbe for InMemoryStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.check_should_fail().await
    }
}
