//! Presentation Layer
//!
//! Authentication middleware.

pub mod middleware;

pub use middleware::{
    AuthMiddlewareState, authenticate, require_authenticated, unauthorized_response,
};
