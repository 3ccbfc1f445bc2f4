//! Domain layer - Core business logic and entities

pub mod admin;
pub mod api_key;
pub mod error;
pub mod row_id;
pub mod store;
pub mod user;

pub use admin::{Admin, AdminId, AdminRepository, AdminSummary};
pub use api_key::{ApiKey, ApiKeyId, ApiKeyRepository, ApiKeyStatus};
pub use error::{DomainError, RegistrationError, RegistrationStage};
pub use row_id::RowIdError;
pub use store::StoreProbe;
pub use user::{NewUser, RegisteredUser, UserDeletion, UserId, UserRepository, UserView};
