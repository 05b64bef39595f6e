//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential parsing, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - Gate and fallback-policy middleware
//!
//! ## Features
//! - HTTP Basic credentials (RFC 7617 subset)
//! - Credential store with unique user names
//! - Transparent password rehash on login
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, stored as PHC strings
//! - Unknown user and wrong password are indistinguishable to clients
//! - Any authenticated user is fully authorized

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{AuthOutcome, AuthenticatedUser};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
