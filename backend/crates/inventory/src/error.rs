//! Inventory Error Types
//!
//! This module provides inventory-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind,
};
use thiserror::Error;

use crate::domain::value_objects::FieldError;

/// Inventory-specific result type alias
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-specific error variants
///
/// "Not found" is reserved for the entity addressed by the path. A
/// reference in the body that points nowhere is a validation error.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Department not found")]
    DepartmentNotFound,

    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Asset not found")]
    AssetNotFound,

    /// Referenced department does not exist
    #[error("Department does not exist")]
    UnknownDepartment,

    /// Referenced employee does not exist
    #[error("Employee does not exist")]
    UnknownEmployee,

    /// Field validation failed
    #[error("{0}")]
    Validation(#[from] FieldError),

    #[error("Department name must be unique")]
    DepartmentNameTaken,

    #[error("Email must be unique")]
    EmailTaken,

    #[error("Serial number must be unique")]
    SerialNumberTaken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl InventoryError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::DepartmentNotFound
            | InventoryError::EmployeeNotFound
            | InventoryError::AssetNotFound => ErrorKind::NotFound,
            InventoryError::UnknownDepartment
            | InventoryError::UnknownEmployee
            | InventoryError::Validation(_) => ErrorKind::BadRequest,
            InventoryError::DepartmentNameTaken
            | InventoryError::EmailTaken
            | InventoryError::SerialNumberTaken => ErrorKind::Conflict,
            InventoryError::Database(e) => classify_sqlx_error(e).0,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            InventoryError::Database(e) => {
                let (kind, message) = classify_sqlx_error(e);
                AppError::new(kind, message)
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            InventoryError::Database(e) => {
                tracing::error!(error = %e, "Inventory database error");
            }
            InventoryError::DepartmentNameTaken
            | InventoryError::EmailTaken
            | InventoryError::SerialNumberTaken => {
                tracing::info!(error = %self, "Uniqueness conflict");
            }
            _ => {
                tracing::debug!(error = %self, "Inventory request rejected");
            }
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        let app_err = err.to_app_error();
        app_err.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::app_error::UNEXPECTED_ERROR_MESSAGE;

    #[test]
    fn test_status_mapping() {
        assert_eq!(InventoryError::AssetNotFound.kind().status_code(), 404);
        assert_eq!(InventoryError::UnknownEmployee.kind().status_code(), 400);
        assert_eq!(InventoryError::EmailTaken.kind().status_code(), 409);
        assert_eq!(
            InventoryError::Validation(FieldError::InvalidEmail)
                .kind()
                .status_code(),
            400
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            InventoryError::DepartmentNameTaken.to_app_error().public_message(),
            "Department name must be unique"
        );
        assert_eq!(
            InventoryError::Validation(FieldError::Required { field: "Full name" })
                .to_app_error()
                .public_message(),
            "Full name is required"
        );
    }

    #[test]
    fn test_database_detail_not_public() {
        let err = InventoryError::Database(sqlx::Error::WorkerCrashed);
        assert_eq!(err.kind().status_code(), 500);
        assert_eq!(err.to_app_error().public_message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn test_database_status_follows_storage_failure() {
        let err = InventoryError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind().status_code(), 503);
        assert_eq!(err.to_app_error().status_code(), 503);
    }

    #[tokio::test]
    async fn test_exhausted_pool_answers_service_unavailable() {
        use axum::Router;
        use axum::body::Body;
        use axum::http::StatusCode;
        use axum::routing::get;
        use kernel::trace::{REQUEST_ID_HEADER, attach_trace_id};
        use tower::ServiceExt;

        async fn list() -> InventoryResult<()> {
            Err(InventoryError::Database(sqlx::Error::PoolTimedOut))
        }

        let app = Router::new()
            .route("/assets", get(list))
            .layer(axum::middleware::from_fn(attach_trace_id));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/assets")
                    .header(REQUEST_ID_HEADER, "req-503")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], 503);
        assert_eq!(body["message"], UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(body["traceId"], "req-503");
    }
}
