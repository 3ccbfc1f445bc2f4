//! Application state for shared services

use std::sync::Arc;

use crate::domain::admin::AdminRepository;
use crate::domain::api_key::{ApiKeyRepository, ApiKeyStatus};
use crate::domain::user::{RegisteredUser, UserRepository, UserView};
use crate::domain::{AdminSummary, DomainError, RegistrationError, StoreProbe};
use crate::infrastructure::admin::{AdminService, PasswordHasher};
use crate::infrastructure::api_key::ApiKeyService;
use crate::infrastructure::user::{RegisterUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub admin_service: Arc<dyn AdminServiceTrait>,
    pub store_probe: Arc<dyn StoreProbe>,
}

/// Trait for API key service operations
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    fn generate(&self) -> String;
    async fn toggle(&self, id: &str) -> Result<ApiKeyStatus, DomainError>;
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisteredUser, RegistrationError>;
    async fn list(&self) -> Vec<UserView>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// Trait for admin service operations
#[async_trait::async_trait]
pub trait AdminServiceTrait: Send + Sync {
    async fn register(&self, email: &str, password: &str) -> Result<AdminSummary, DomainError>;
    async fn login(&self, email: &str, password: &str) -> Result<AdminSummary, DomainError>;
    async fn list(&self) -> Result<Vec<AdminSummary>, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: ApiKeyRepository + 'static> ApiKeyServiceTrait for ApiKeyService<R> {
    fn generate(&self) -> String {
        ApiKeyService::generate(self)
    }

    async fn toggle(&self, id: &str) -> Result<ApiKeyStatus, DomainError> {
        ApiKeyService::toggle(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisteredUser, RegistrationError> {
        UserService::register(self, request).await
    }

    async fn list(&self) -> Vec<UserView> {
        UserService::list(self).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R, H> AdminServiceTrait for AdminService<R, H>
where
    R: AdminRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, email: &str, password: &str) -> Result<AdminSummary, DomainError> {
        AdminService::register(self, email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AdminSummary, DomainError> {
        AdminService::login(self, email, password).await
    }

    async fn list(&self) -> Result<Vec<AdminSummary>, DomainError> {
        AdminService::list(self).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        AdminService::delete(self, id).await
    }
}
