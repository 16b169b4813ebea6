/// Core traits for Pitstop
use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// User store
///
/// Persistence capability for user records. Implementers own the backing
/// format, id assignment and password hashing; callers only ever hand over
/// whole `User` values.
///
/// Email lookups ignore surrounding whitespace; otherwise the match is exact.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users, in whatever order the store keeps them
    async fn users(&self) -> Result<Vec<User>>;

    /// Check whether a user with this (trimmed) email exists
    async fn user_exists(&self, email: &str) -> Result<bool>;

    /// Persist a new user
    ///
    /// Assigns a fresh id when `user.id` is `None` and stores a hash of
    /// `user.password`, never the password itself. The initial
    /// `provider_credential` becomes the only entry of the credential list.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Overwrite the record with the same id
    ///
    /// # Errors
    /// Returns `UserNotFound` if no record has `user.id`
    async fn update_user(&self, user: &User) -> Result<()>;

    /// Get a user by ID
    async fn find_user(&self, id: &UserId) -> Result<Option<User>>;

    /// Verify a password for the user with this email
    ///
    /// Returns `None` for an unknown email or a wrong password.
    async fn login(&self, email: &str, password: &str) -> Result<Option<User>>;
}
