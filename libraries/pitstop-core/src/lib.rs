//! Pitstop Core
//!
//! Domain types, the user store contract, and error handling shared by every
//! Pitstop crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `ProviderCredential`, `Project`, `Build`, `ProjectSummary`
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `PitstopError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use pitstop_core::types::{ProviderCredential, ProviderKind, User, UserId};
//!
//! let user = User {
//!     id: UserId::generate(),
//!     email: "alice@example.com".to_string(),
//!     password_hash: String::new(),
//!     provider_credentials: vec![ProviderCredential::stub(ProviderKind::GitHub, "alice@example.com")],
//! };
//!
//! // Changes are made by building a replacement record
//! let id = user.id.clone();
//! let updated = user.with_provider_credentials(Vec::new());
//! assert_eq!(updated.id, id);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{PitstopError, Result};
pub use traits::UserStore;

pub use types::{
    // Users
    NewUser, User, UserId,
    // Credentials
    CreateProviderCredential, CredentialId, ProviderCredential, ProviderKind,
    UpdateProviderCredential,
    // Projects
    Build, BuildStatus, Project, ProjectId, ProjectSummary,
};
