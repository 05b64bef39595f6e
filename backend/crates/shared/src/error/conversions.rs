//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from storage and HTTP extractor errors
//! to [`AppError`], and renders [`AppError`] as the JSON error envelope.

#[allow(unused_imports)]
use super::app_error::AppError;
#[allow(unused_imports)]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Status and public message for a storage failure
///
/// Domain crates that wrap `sqlx::Error` in their own enums use this so
/// that they answer with the same status as a bare [`AppError`] conversion.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL specific error codes
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            let Some(code) = db_err.code() else {
                return (ErrorKind::InternalServerError, "Database error");
            };
            match code.as_ref() {
                // Class 23: Integrity Constraint Violation
                "23000" => (ErrorKind::Conflict, "Integrity constraint violation"),
                "23001" => (ErrorKind::Conflict, "Restrict violation"),
                "23502" => (ErrorKind::BadRequest, "Required field is null"),
                "23503" => (ErrorKind::Conflict, "Foreign key violation"),
                "23505" => (ErrorKind::Conflict, "Duplicate key value"),
                "23514" => (ErrorKind::BadRequest, "Check constraint violation"),
                // Class 42: Syntax Error or Access Rule Violation
                "42501" => (ErrorKind::Forbidden, "Insufficient privilege"),
                // Class 53: Insufficient Resources
                "53000" | "53100" | "53200" | "53300" => {
                    (ErrorKind::ServiceUnavailable, "Database resource exhausted")
                }
                // Class 57: Operator Intervention
                "57000" | "57014" | "57P01" | "57P02" | "57P03" => {
                    (ErrorKind::ServiceUnavailable, "Database unavailable")
                }
                _ => (ErrorKind::InternalServerError, "Database error"),
            }
        }
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        sqlx::Error::Protocol(_) => (ErrorKind::InternalServerError, "Database protocol error"),
        sqlx::Error::Tls(_) => (ErrorKind::InternalServerError, "Database TLS error"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx_error(&err);
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
            .with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
            .with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;
        use std::error::Error;

        if self.is_server_error() {
            tracing::error!(
                error = %self,
                source = ?self.source(),
                "Unexpected error while handling request"
            );
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // The boundary middleware fills in the trace id from this extension.
        let envelope = self.to_envelope();
        let mut response = (status, Json(envelope.clone())).into_response();
        response.extensions_mut().insert(envelope);
        response
    }
}

#[cfg(all(test, feature = "sqlx"))]
mod sqlx_tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), 503);
        assert_eq!(
            classify_sqlx_error(&sqlx::Error::PoolTimedOut).0,
            ErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn test_row_not_found() {
        assert_eq!(AppError::from(sqlx::Error::RowNotFound).status_code(), 404);
    }

    #[test]
    fn test_unclassified_is_internal() {
        let err = AppError::from(sqlx::Error::WorkerCrashed);
        assert_eq!(err.status_code(), 500);
        assert!(std::error::Error::source(&err).is_some());
    }
}
