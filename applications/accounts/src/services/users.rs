/// User and provider credential service
use crate::services::credentials::{append_credential, replace_credential};
use pitstop_core::{
    error::Result,
    types::{
        CreateProviderCredential, CredentialId, NewUser, ProviderCredential, ProviderKind,
        UpdateProviderCredential, User, UserId,
    },
    UserStore,
};
use std::sync::Arc;

/// Front door for every user and credential change
///
/// Holds no state besides its store. Every change is written back as a
/// complete replacement `User`, never as a field patch. Store errors are
/// returned unchanged; "not found" and "already exists" are not errors here.
///
/// `create_user` checks for an existing email and then creates, without
/// atomicity between the two steps. Stores that must never hold duplicate
/// emails have to enforce that themselves (the bundled stores do).
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    primary_provider: ProviderKind,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            primary_provider: ProviderKind::default(),
        }
    }

    /// Provider used for the stub credential of new accounts
    pub fn with_primary_provider(mut self, provider: ProviderKind) -> Self {
        self.primary_provider = provider;
        self
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.store.users().await
    }

    /// Create an account unless the email is already registered
    ///
    /// The email is trimmed first. New accounts get a stub credential for the
    /// primary provider carrying only the email. Returns `None`, without
    /// writing anything, if the email is taken.
    pub async fn create_user(
        &self,
        id: Option<UserId>,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        let email = email.trim();

        if self.store.user_exists(email).await? {
            tracing::debug!(email, "account already exists");
            return Ok(None);
        }

        tracing::debug!(email, "creating account");
        let user = self
            .store
            .create_user(NewUser {
                id,
                email: email.to_string(),
                password: password.to_string(),
                provider_credential: ProviderCredential::stub(self.primary_provider, email),
            })
            .await?;

        Ok(Some(user))
    }

    /// Persist `user` as-is; callers build the full record
    pub async fn update_user(&self, user: &User) -> Result<()> {
        self.store.update_user(user).await
    }

    pub async fn find_user(&self, id: &UserId) -> Result<Option<User>> {
        self.store.find_user(id).await
    }

    /// Returns `None` when the email is unknown or the password is wrong
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let email = email.trim();

        tracing::debug!(email, "attempting login");
        self.store.login(email, password).await
    }

    // ========================================================================
    // Provider credentials
    // ========================================================================

    /// Append a new credential to the user's list
    ///
    /// An unknown `user_id` is logged and ignored.
    pub async fn create_provider_credential(
        &self,
        user_id: &UserId,
        credential: CreateProviderCredential,
    ) -> Result<()> {
        let credential = credential.into_credential(self.primary_provider);

        let Some(mut user) = self.store.find_user(user_id).await? else {
            tracing::error!(%user_id, "can't create provider credential, user does not exist");
            return Ok(());
        };

        let credentials =
            append_credential(std::mem::take(&mut user.provider_credentials), credential);
        self.update_user(&user.with_provider_credentials(credentials))
            .await
    }

    /// Replace the credential(s) with `id` by a freshly built one
    ///
    /// All credentials whose id equals `id` are dropped and the new credential
    /// is appended, so it moves to the end of the list. The new credential has
    /// no id. If nothing matches `id` this is a plain append. An unknown
    /// `user_id` is logged and ignored.
    pub async fn update_provider_credential(
        &self,
        user_id: &UserId,
        id: Option<&CredentialId>,
        update: UpdateProviderCredential,
    ) -> Result<()> {
        let credential = update.into_credential(self.primary_provider);

        let Some(mut user) = self.store.find_user(user_id).await? else {
            tracing::error!(%user_id, "can't update provider credential, user does not exist");
            return Ok(());
        };

        let credentials =
            replace_credential(std::mem::take(&mut user.provider_credentials), id, credential);
        self.update_user(&user.with_provider_credentials(credentials))
            .await
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("primary_provider", &self.primary_provider)
            .finish_non_exhaustive()
    }
}
