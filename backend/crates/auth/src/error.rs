//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind,
};
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Credential rejections are not errors; they are `AuthOutcome` values.
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// User name failed validation
    #[error("{0}")]
    InvalidUserName(#[from] UserNameError),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] platform::password::PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidUserName(_) => ErrorKind::BadRequest,
            AuthError::Database(e) => classify_sqlx_error(e).0,
            AuthError::PasswordHash(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(e) => {
                let (kind, message) = classify_sqlx_error(e);
                AppError::new(kind, message)
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Auth password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let app_err = err.to_app_error();
        app_err.with_source(err)
    }
}
