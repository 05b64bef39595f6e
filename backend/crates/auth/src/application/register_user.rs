//! Register User Use Case
//!
//! Hashes a password and inserts a user into the credential store.
//! Used by the startup bootstrap; there is no public sign-up route.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register user input
pub struct RegisterUserInput {
    pub user_name: String,
    pub password: String,
}

/// Register user output
#[derive(Debug)]
pub struct RegisterUserOutput {
    pub user_id: UserId,
}

/// Register user use case
pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> AuthResult<RegisterUserOutput> {
        let user_name = UserName::new(input.user_name)?;

        let raw = RawPassword::new(input.password);
        let pepper = self.config.password_pepper.clone();
        let password_hash =
            tokio::task::spawn_blocking(move || UserPassword::from_raw(&raw, pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {e}")))??;

        let user = User::new(user_name, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterUserOutput {
            user_id: user.user_id,
        })
    }
}
