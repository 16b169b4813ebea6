/// Wiring of configuration, store and services
use crate::config::AccountsConfig;
use crate::error::Result;
use crate::services::UserService;
use pitstop_core::UserStore;
use pitstop_storage::{JsonUserStore, MemoryUserStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Where user records live for this process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON file at the given path
    Json(PathBuf),
    /// Nothing survives the process
    Memory,
}

/// Application state shared by all commands
#[derive(Clone)]
pub struct AppState {
    pub config: AccountsConfig,
    pub backend: StoreBackend,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(config: AccountsConfig, backend: StoreBackend, user_service: Arc<UserService>) -> Self {
        Self {
            config,
            backend,
            user_service,
        }
    }

    /// Open the configured store and build the services on top of it
    ///
    /// This is the only place that decides which store the service gets.
    pub async fn bootstrap(config: AccountsConfig, backend: StoreBackend) -> Result<Self> {
        config.validate()?;

        let store: Arc<dyn UserStore> = match &backend {
            StoreBackend::Json(path) => {
                let store = JsonUserStore::open_file(path.clone(), config.auth.bcrypt_cost).await?;
                tracing::info!(path = %path.display(), "using JSON user store");
                Arc::new(store)
            }
            StoreBackend::Memory => {
                tracing::info!("using in-memory user store");
                Arc::new(MemoryUserStore::new(config.auth.bcrypt_cost))
            }
        };

        let user_service = UserService::new(store)
            .with_primary_provider(config.accounts.primary_provider);

        Ok(Self::new(config, backend, Arc::new(user_service)))
    }
}
