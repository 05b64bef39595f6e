//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types, the JSON error envelope and result aliases
//! - Typed ID wrappers shared by every domain crate
//! - The request-boundary middleware that stamps trace identifiers
//!   into error responses (feature `axum`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod envelope;
    pub mod kind;
}
pub mod id;
#[cfg(feature = "axum")]
pub mod trace;
