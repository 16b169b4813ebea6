//! In-memory user store tests


use pitstop_core::types::*;
use pitstop_core::{PitstopError, UserStore};
use pitstop_storage::MemoryUserStore;
use std::sync::Arc;
use test_helpers::{new_user, TEST_COST, TEST_PASSWORD};

#[tokio::test]
async fn test_create_find_and_login() {
    let store = MemoryUserStore::new(TEST_COST);

    let created = store.create_user(new_user("a@x.com")).await.unwrap();

    assert!(store.user_exists("a@x.com").await.unwrap());
    assert_eq!(store.find_user(&created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(
        store.login("a@x.com", TEST_PASSWORD).await.unwrap(),
        Some(created)
    );
}

#[tokio::test]
async fn test_find_unknown_user_is_none() {
    let store = MemoryUserStore::new(TEST_COST);

    assert!(store.find_user(&UserId::new("nope")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_email_match_is_exact() {
    let store = MemoryUserStore::new(TEST_COST);
    store.create_user(new_user("a@x.com")).await.unwrap();

    assert!(!store.user_exists("A@X.COM").await.unwrap());
}

#[tokio::test]
async fn test_email_lookups_ignore_surrounding_whitespace() {
    let store = MemoryUserStore::new(TEST_COST);
    store.create_user(new_user("a@x.com")).await.unwrap();

    assert!(store.user_exists("  a@x.com\n").await.unwrap());
    assert!(store
        .login(" a@x.com ", TEST_PASSWORD)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_concurrent_creates_for_one_email_leave_one_user() {
    let store = Arc::new(MemoryUserStore::new(TEST_COST));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.create_user(new_user("race@x.com")).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(PitstopError::Duplicate(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_with_users_seeds_table() {
    let seeded = User {
        id: UserId::new("u1"),
        email: "a@x.com".to_string(),
        password_hash: String::new(),
        provider_credentials: Vec::new(),
    };
    let store = MemoryUserStore::with_users(vec![seeded.clone()], TEST_COST);

    assert_eq!(store.users().await.unwrap(), vec![seeded]);
}
