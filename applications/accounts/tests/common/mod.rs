//! Common test utilities and fixtures
#![allow(dead_code)]

use pitstop_accounts::UserService;
use pitstop_core::types::*;
use pitstop_storage::MemoryUserStore;
use std::sync::Arc;

/// Lowest bcrypt cost, keeps the tests fast
pub const TEST_COST: u32 = 4;

/// Service over an empty in-memory store, plus a handle to inspect the store
pub fn memory_service() -> (UserService, Arc<MemoryUserStore>) {
    seeded_service(Vec::new())
}

/// Service over an in-memory store holding `users`
pub fn seeded_service(users: Vec<User>) -> (UserService, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::with_users(users, TEST_COST));
    (UserService::new(store.clone()), store)
}

/// Test user credentials and records
pub mod fixtures {
    use super::*;

    pub const TEST_EMAIL: &str = "a@x.com";
    pub const TEST_PASSWORD: &str = "TestPassword123!";

    pub fn credential(id: Option<&str>, token: &str) -> ProviderCredential {
        ProviderCredential {
            id: id.map(CredentialId::new),
            provider: ProviderKind::GitHub,
            email: Some(TEST_EMAIL.to_string()),
            api_token: Some(token.to_string()),
            full_name: None,
        }
    }

    /// A stored user record; the hash is never checked by these tests
    pub fn user(id: &str, email: &str, credentials: Vec<ProviderCredential>) -> User {
        User {
            id: UserId::new(id),
            email: email.to_string(),
            password_hash: "$2b$04$fixturefixturefixturefixturefixturefixturefixturefix".to_string(),
            provider_credentials: credentials,
        }
    }
}
