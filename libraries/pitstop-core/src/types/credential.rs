//! External provider credential types

use super::ids::CredentialId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External service a credential authenticates against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    GitHub,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::GitHub => "github",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = crate::PitstopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(ProviderKind::GitHub),
            other => Err(crate::PitstopError::invalid_input(format!(
                "unknown provider: {other}"
            ))),
        }
    }
}

/// Credential for an external provider, owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCredential {
    /// Key within the owning user's collection; may be unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CredentialId>,

    #[serde(rename = "type", default)]
    pub provider: ProviderKind,

    pub email: Option<String>,
    pub api_token: Option<String>,
    pub full_name: Option<String>,
}

impl ProviderCredential {
    /// Placeholder credential created alongside a new account: only the email
    /// is known, no token has been registered yet.
    pub fn stub(provider: ProviderKind, email: impl Into<String>) -> Self {
        Self {
            id: None,
            provider,
            email: Some(email.into()),
            api_token: None,
            full_name: None,
        }
    }

    pub fn has_token(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Data for registering a credential on an existing user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProviderCredential {
    pub id: Option<CredentialId>,
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub full_name: Option<String>,
}

impl CreateProviderCredential {
    pub fn into_credential(self, provider: ProviderKind) -> ProviderCredential {
        ProviderCredential {
            id: self.id,
            provider,
            email: self.email,
            api_token: self.api_token,
            full_name: self.full_name,
        }
    }
}

/// Replacement values for an existing credential
///
/// Carries no id: the credential built from it is stored without one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProviderCredential {
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub full_name: Option<String>,
}

impl UpdateProviderCredential {
    pub fn into_credential(self, provider: ProviderKind) -> ProviderCredential {
        ProviderCredential {
            id: None,
            provider,
            email: self.email,
            api_token: self.api_token,
            full_name: self.full_name,
        }
    }
}
