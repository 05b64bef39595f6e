//! In-memory Repository Implementation
//!
//! Same contract as the PostgreSQL store, for tests without a database.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// In-memory credential store keyed by user name
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored hash for a user name, for assertions
    pub async fn password_hash_of(&self, user_name: &str) -> Option<String> {
        self.users
            .read()
            .await
            .get(user_name)
            .map(|u| u.password_hash.as_phc_string().to_owned())
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(user.user_name.as_str()) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.user_name.as_str().to_owned(), user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_name.as_str()).cloned())
    }

    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if let Some(user) = users.values_mut().find(|u| &u.user_id == user_id) {
            user.set_password_hash(password_hash.clone());
        }
        Ok(())
    }

    async fn count(&self) -> AuthResult<i64> {
        Ok(self.users.read().await.len() as i64)
    }
}
