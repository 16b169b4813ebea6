//! Pitstop Accounts
//!
//! User accounts and their external provider credentials, on top of any
//! `UserStore`.
//!
//! This library exposes the service and its wiring for the `pitstop` binary
//! and for tests.

pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AccountsConfig;
pub use error::{AccountsError, Result};
pub use services::{credentials, UserService};
pub use state::{AppState, StoreBackend};
