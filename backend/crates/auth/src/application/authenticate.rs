//! Authenticate Use Case
//!
//! The single decision function behind the gate: maps an `Authorization`
//! header to an [`AuthOutcome`]. Storage failures are the only errors.

use std::sync::Arc;

use platform::password::Verification;

use crate::application::config::AuthConfig;
use crate::domain::credential::{CredentialPresentation, MalformedCredential, parse_basic_authorization};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Reason attached to every rejected user name / password pair
pub const INVALID_CREDENTIAL_MESSAGE: &str = "username or password incorrect";

/// Identity mounted on an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub user_name: UserName,
}

/// Result of evaluating a presented credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Nothing to evaluate; the route's policy decides
    NoCredential,
    /// A Basic credential was presented but could not be parsed
    Malformed(MalformedCredential),
    /// Unknown user or wrong password; never says which
    InvalidCredential,
    Authenticated(AuthenticatedUser),
}

impl AuthOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::InvalidCredential)
    }

    /// Reason recorded for a failed attempt
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Malformed(reason) => Some(reason.to_string()),
            Self::InvalidCredential => Some(INVALID_CREDENTIAL_MESSAGE.to_string()),
            _ => None,
        }
    }
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, authorization: Option<&str>) -> AuthResult<AuthOutcome> {
        let credentials = match parse_basic_authorization(authorization) {
            CredentialPresentation::Absent => return Ok(AuthOutcome::NoCredential),
            CredentialPresentation::Malformed(reason) => {
                return Ok(AuthOutcome::Malformed(reason));
            }
            CredentialPresentation::Present(credentials) => credentials,
        };

        // A name that could never have been registered cannot match a user.
        let Ok(user_name) = UserName::new(credentials.user_name) else {
            return Ok(AuthOutcome::InvalidCredential);
        };

        let Some(user) = self.user_repo.find_by_user_name(&user_name).await? else {
            return Ok(AuthOutcome::InvalidCredential);
        };

        let stored = user.password_hash.clone();
        let password = credentials.password;
        let pepper = self.config.password_pepper.clone();

        // Argon2 is CPU-bound; keep it off the async workers.
        let (verification, rehashed) = tokio::task::spawn_blocking(move || {
            let verification = stored.verify(&password, pepper.as_deref());
            let rehashed = match verification {
                Verification::MatchNeedsRehash => {
                    Some(UserPassword::from_raw(&password, pepper.as_deref()))
                }
                _ => None,
            };
            (verification, rehashed)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))?;

        if verification == Verification::Mismatch {
            return Ok(AuthOutcome::InvalidCredential);
        }

        match rehashed {
            Some(Ok(new_hash)) => {
                match self
                    .user_repo
                    .update_password_hash(&user.user_id, &new_hash)
                    .await
                {
                    Ok(()) => tracing::info!(user_id = %user.user_id, "Password hash upgraded"),
                    Err(e) => {
                        tracing::warn!(user_id = %user.user_id, error = %e, "Password rehash failed")
                    }
                }
            }
            Some(Err(e)) => {
                tracing::warn!(user_id = %user.user_id, error = %e, "Password rehash failed");
            }
            None => {}
        }

        Ok(AuthOutcome::Authenticated(AuthenticatedUser {
            user_id: user.user_id,
            user_name: user.user_name,
        }))
    }
}
