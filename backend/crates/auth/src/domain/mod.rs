//! Domain Layer
//!
//! Contains entities, value objects, credential parsing and repository traits.

pub mod credential;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use credential::{
    BasicCredentials, CredentialPresentation, MalformedCredential, parse_basic_authorization,
};
pub use entity::user::User;
pub use repository::UserRepository;
