//! Auth Middleware
//!
//! Two layers cooperate:
//! - [`authenticate`] runs on every request. It evaluates the presented
//!   credential and mounts an [`AuthenticatedUser`] on success. It never
//!   rejects by itself.
//! - [`require_authenticated`] is the fallback policy for protected routes:
//!   any request without a mounted identity gets a `401` challenge.
//!
//! Malformed and invalid credentials therefore surface exactly like a
//! missing one, and public routes keep working with a bad header.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::application::authenticate::{AuthOutcome, AuthenticateUseCase, AuthenticatedUser};
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;

/// Message of every authentication challenge
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required";

/// Middleware state
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthMiddlewareState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// Gate: evaluate the `Authorization` header and mount the identity
pub async fn authenticate<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let outcome = match use_case.execute(authorization.as_deref()).await {
        Ok(outcome) => outcome,
        Err(e) => return e.into_response(),
    };

    match outcome {
        AuthOutcome::Authenticated(user) => {
            tracing::Span::current().record("user", tracing::field::display(&user.user_name));
            req.extensions_mut().insert(user);
        }
        AuthOutcome::NoCredential => {}
        failure => {
            tracing::debug!(
                reason = %failure.failure_reason().unwrap_or_default(),
                "Credential rejected"
            );
        }
    }

    next.run(req).await
}

/// Fallback policy: reject requests that carry no authenticated identity
pub async fn require_authenticated(
    State(config): State<Arc<AuthConfig>>,
    req: Request,
    next: Next,
) -> Response {
    if req.extensions().get::<AuthenticatedUser>().is_none() {
        return unauthorized_response(&config);
    }

    next.run(req).await
}

/// `401` envelope with the `WWW-Authenticate` challenge
pub fn unauthorized_response(config: &AuthConfig) -> Response {
    let challenge = HeaderValue::from_str(&config.challenge())
        .unwrap_or_else(|_| HeaderValue::from_static("Basic"));

    let mut response = AppError::unauthorized(UNAUTHORIZED_MESSAGE).into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, challenge);
    response
}
