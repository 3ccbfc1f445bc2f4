//! User domain
//!
//! Users are the end-users an administrator issues API keys to. A user is
//! only ever created together with its key and deleting it removes the key.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, RegisteredUser, UserDeletion, UserId, UserView};
pub use repository::UserRepository;
pub use validation::{validate_registration, UserValidationError};
