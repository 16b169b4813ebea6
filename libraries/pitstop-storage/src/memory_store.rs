//! In-memory user store
//!
//! Same semantics as the JSON store without touching disk. Used for tests and
//! throwaway sessions.

use crate::password::DEFAULT_COST;
use crate::users;
use async_trait::async_trait;
use pitstop_core::{error::Result, types::*, UserStore};
use tokio::sync::RwLock;

pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
    bcrypt_cost: u32,
}

impl MemoryUserStore {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self::with_users(Vec::new(), bcrypt_cost)
    }

    /// Start from existing records, e.g. fixtures
    pub fn with_users(users: Vec<User>, bcrypt_cost: u32) -> Self {
        Self {
            users: RwLock::new(users),
            bcrypt_cost,
        }
    }

    /// Copy of the current table
    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn users(&self) -> Result<Vec<User>> {
        Ok(self.snapshot().await)
    }

    async fn user_exists(&self, email: &str) -> Result<bool> {
        Ok(users::email_exists(&self.users.read().await, email))
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let user = users::build(user, self.bcrypt_cost)?;

        let mut table = self.users.write().await;
        users::insert(&mut table, user.clone())?;
        Ok(user)
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut table = self.users.write().await;
        users::replace(&mut table, user)?;
        Ok(())
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(users::find_by_id(&self.users.read().await, id).cloned())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        Ok(users::authenticate(&self.users.read().await, email, password))
    }
}
