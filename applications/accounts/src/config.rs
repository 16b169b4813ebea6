/// Accounts configuration
use crate::error::{AccountsError, Result};
use pitstop_core::ProviderKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "pitstop.toml";

/// Legacy environment variable naming the data folder
pub const LEGACY_DATA_FOLDER_ENV: &str = "data_store_folder";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountsConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_accounts")]
    pub accounts: AccountSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Folder holding the JSON data files; see `resolve_data_store_folder`
    #[serde(default)]
    pub data_store_folder: Option<PathBuf>,

    #[serde(default = "default_users_file")]
    pub users_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountSettings {
    /// Provider of the stub credential attached to every new account
    #[serde(default)]
    pub primary_provider: ProviderKind,
}

impl AccountsConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `pitstop.toml` lookup. Environment
    /// variables use the `PITSTOP_` prefix and `__` between sections, e.g.
    /// `PITSTOP_AUTH__BCRYPT_COST=10`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                // Load from config file if it exists
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PITSTOP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| AccountsError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AccountsError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(AccountsError::Config(format!(
                "bcrypt cost must be between 4 and 31, got {}",
                self.auth.bcrypt_cost
            )));
        }

        if self.storage.users_file.trim().is_empty() {
            return Err(AccountsError::Config(
                "users file name must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Folder for the JSON store
    ///
    /// Explicit configuration wins, then the legacy `data_store_folder`
    /// variable (passed in by the caller), then `./sample_data`.
    pub fn resolve_data_store_folder(&self, legacy_env: Option<PathBuf>) -> PathBuf {
        self.storage
            .data_store_folder
            .clone()
            .or(legacy_env)
            .unwrap_or_else(default_data_store_folder)
    }

    /// Full path of the users file
    pub fn users_file_path(&self, legacy_env: Option<PathBuf>) -> PathBuf {
        self.resolve_data_store_folder(legacy_env)
            .join(&self.storage.users_file)
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        data_store_folder: None,
        users_file: default_users_file(),
    }
}

fn default_users_file() -> String {
    pitstop_storage::USERS_FILE.to_string()
}

fn default_data_store_folder() -> PathBuf {
    PathBuf::from("./sample_data")
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        bcrypt_cost: default_bcrypt_cost(),
    }
}

fn default_bcrypt_cost() -> u32 {
    pitstop_storage::password::DEFAULT_COST
}

fn default_accounts() -> AccountSettings {
    AccountSettings {
        primary_provider: ProviderKind::default(),
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            auth: default_auth(),
            accounts: default_accounts(),
        }
    }
}
