/// User domain type
use super::credential::ProviderCredential;
use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, immutable once assigned
    pub id: UserId,

    /// Login email, stored trimmed
    pub email: String,

    /// Opaque password material owned by the store
    pub password_hash: String,

    /// Registered external provider credentials, in insertion order
    #[serde(default)]
    pub provider_credentials: Vec<ProviderCredential>,
}

impl User {
    /// Build a replacement record that carries every field forward except the
    /// credential list.
    pub fn with_provider_credentials(self, provider_credentials: Vec<ProviderCredential>) -> Self {
        Self {
            provider_credentials,
            ..self
        }
    }
}

/// Data for creating a new user
///
/// `password` is plain text; hashing is the store's job.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub email: String,
    pub password: String,
    pub provider_credential: ProviderCredential,
}
