//! JSON file user store
//!
//! All users live in one JSON array (`users.json` inside the data folder).
//! The file is read once on open and rewritten in full after every change.

use crate::error::Result as StorageResult;
use crate::users;
use async_trait::async_trait;
use pitstop_core::{error::Result, types::*, UserStore};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

/// File name used inside a data folder
pub const USERS_FILE: &str = "users.json";

pub struct JsonUserStore {
    path: PathBuf,
    users: RwLock<Vec<User>>,
    bcrypt_cost: u32,
}

impl JsonUserStore {
    /// Open the store in `folder`, reading `users.json` if it exists
    pub async fn open(folder: impl AsRef<Path>, bcrypt_cost: u32) -> StorageResult<Self> {
        Self::open_file(folder.as_ref().join(USERS_FILE), bcrypt_cost).await
    }

    /// Open the store backed by an explicit file path
    ///
    /// A missing file is an empty store; it is created on the first write.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub async fn open_file(path: PathBuf, bcrypt_cost: u32) -> StorageResult<Self> {
        let users = Self::load(&path).await?;
        tracing::debug!(path = %path.display(), count = users.len(), "loaded user store");

        Ok(Self {
            path,
            users: RwLock::new(users),
            bcrypt_cost,
        })
    }

    async fn load(path: &Path) -> StorageResult<Vec<User>> {
        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&raw)?)
    }

    async fn persist(&self, users: &[User]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let payload = serde_json::to_vec_pretty(users)?;

        // Write next to the target and rename so readers never see half a file
        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&temp_path, payload).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    /// Apply `operation` to a copy of the table, persist it, then publish it
    ///
    /// The in-memory table only changes if the file write succeeded.
    async fn mutate<F>(&self, operation: F) -> StorageResult<()>
    where
        F: FnOnce(&mut Vec<User>) -> StorageResult<()>,
    {
        let mut table = self.users.write().await;
        let mut next = table.clone();
        operation(&mut next)?;

        self.persist(&next).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to write user store");
            e
        })?;

        *table = next;
        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn user_exists(&self, email: &str) -> Result<bool> {
        Ok(users::email_exists(&self.users.read().await, email))
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let user = users::build(user, self.bcrypt_cost)?;

        let created = user.clone();
        self.mutate(move |table| users::insert(table, user)).await?;
        Ok(created)
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        self.mutate(|table| users::replace(table, user)).await?;
        Ok(())
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(users::find_by_id(&self.users.read().await, id).cloned())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        Ok(users::authenticate(&self.users.read().await, email, password))
    }
}

impl std::fmt::Debug for JsonUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonUserStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

