//! Repository Traits
//!
//! Interfaces for the credential store. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user; a duplicate user name yields `AuthError::UserNameTaken`
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by exact user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Replace the stored password hash
    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<()>;

    /// Number of users in the store
    async fn count(&self) -> AuthResult<i64>;
}
