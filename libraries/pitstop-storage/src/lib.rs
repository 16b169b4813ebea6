//! Pitstop Storage
//!
//! `UserStore` implementations for Pitstop.
//!
//! # Architecture
//!
//! - **JSON on disk**: `JsonUserStore` keeps every user in one `users.json`
//!   file inside a data folder and rewrites it atomically on change
//! - **In memory**: `MemoryUserStore` has identical semantics without a file
//! - **Password hashing**: both stores hash with bcrypt; nothing outside this
//!   crate reads a password hash
//!
//! Unlike the service layer, the stores check email uniqueness under their
//! write lock, so two racing creates for one email cannot both succeed.
//!
//! # Example
//!
//! ```rust,no_run
//! use pitstop_core::UserStore;
//! use pitstop_storage::JsonUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonUserStore::open("./sample_data", pitstop_storage::password::DEFAULT_COST).await?;
//!
//! for user in store.users().await? {
//!     println!("{} {}", user.id, user.email);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod json_store;
mod memory_store;

pub mod password;
pub mod users;

pub use error::StorageError;
pub use json_store::{JsonUserStore, USERS_FILE};
pub use memory_store::MemoryUserStore;
