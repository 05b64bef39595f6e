//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod register_user;

// Re-exports
pub use authenticate::{AuthOutcome, AuthenticateUseCase, AuthenticatedUser};
pub use config::AuthConfig;
pub use register_user::{RegisterUserInput, RegisterUserOutput, RegisterUserUseCase};
