//! User record queries and mutations
//!
//! Both stores keep users as an ordered `Vec<User>`; this module holds the
//! operations on that table so the stores differ only in how they persist it.

use crate::error::{Result, StorageError};
use crate::password;
use pitstop_core::types::{NewUser, User, UserId};

/// Get a user by ID
pub fn find_by_id<'a>(users: &'a [User], id: &UserId) -> Option<&'a User> {
    users.iter().find(|u| &u.id == id)
}

/// Get a user by exact (trimmed) email
pub fn find_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    let email = email.trim();
    users.iter().find(|u| u.email == email)
}

/// Check if a user with this email exists
pub fn email_exists(users: &[User], email: &str) -> bool {
    find_by_email(users, email).is_some()
}

/// Turn creation data into a full record
///
/// Generates an id when none was given and replaces the plain password with
/// its bcrypt hash. Hashing is slow, so do this before taking any lock.
pub fn build(new_user: NewUser, bcrypt_cost: u32) -> Result<User> {
    let password_hash = password::hash_password(&new_user.password, bcrypt_cost)?;

    Ok(User {
        id: new_user.id.unwrap_or_else(UserId::generate),
        email: new_user.email.trim().to_string(),
        password_hash,
        provider_credentials: vec![new_user.provider_credential],
    })
}

/// Append a new record
///
/// # Errors
/// Fails if the email or the id is already taken
pub fn insert(users: &mut Vec<User>, user: User) -> Result<()> {
    if email_exists(users, &user.email) {
        return Err(StorageError::DuplicateEmail(user.email));
    }
    if find_by_id(users, &user.id).is_some() {
        return Err(StorageError::DuplicateId(user.id));
    }

    users.push(user);
    Ok(())
}

/// Overwrite the record with the same id, keeping its position
pub fn replace(users: &mut [User], user: &User) -> Result<()> {
    let slot = users
        .iter_mut()
        .find(|u| u.id == user.id)
        .ok_or_else(|| StorageError::UserNotFound(user.id.clone()))?;

    *slot = user.clone();
    Ok(())
}

/// Look up a user by email and check the password
///
/// An unreadable stored hash counts as a failed login.
pub fn authenticate(users: &[User], email: &str, password: &str) -> Option<User> {
    let user = find_by_email(users, email)?;

    match password::verify_password(password, &user.password_hash) {
        Ok(true) => Some(user.clone()),
        Ok(false) => None,
        Err(e) => {
            tracing::warn!(user_id = %user.id, error = %e, "stored password hash is unreadable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitstop_core::types::{ProviderCredential, ProviderKind};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            id: None,
            email: email.to_string(),
            password: "hunter2".to_string(),
            provider_credential: ProviderCredential::stub(ProviderKind::GitHub, email.trim()),
        }
    }

    #[test]
    fn build_assigns_id_and_hashes_password() {
        let user = build(new_user("a@x.com"), 4).unwrap();

        assert!(!user.id.as_str().is_empty());
        assert_ne!(user.password_hash, "hunter2");
        assert_eq!(user.provider_credentials.len(), 1);
    }

    #[test]
    fn build_keeps_requested_id_and_trims_email() {
        let mut data = new_user("  a@x.com ");
        data.id = Some(UserId::new("u1"));

        let user = build(data, 4).unwrap();
        assert_eq!(user.id, UserId::new("u1"));
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn insert_rejects_duplicate_email() {
        let mut users = Vec::new();
        insert(&mut users, build(new_user("a@x.com"), 4).unwrap()).unwrap();

        let err = insert(&mut users, build(new_user("a@x.com"), 4).unwrap()).unwrap_err();
        assert!(matches!(err, StorageError::DuplicateEmail(_)));
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn replace_keeps_position() {
        let mut users = Vec::new();
        insert(&mut users, build(new_user("a@x.com"), 4).unwrap()).unwrap();
        insert(&mut users, build(new_user("b@x.com"), 4).unwrap()).unwrap();

        let updated = users[0].clone().with_provider_credentials(Vec::new());
        replace(&mut users, &updated).unwrap();

        assert_eq!(users[0], updated);
        assert_eq!(users[1].email, "b@x.com");
    }

    #[test]
    fn replace_unknown_id_fails() {
        let mut users = Vec::new();
        let stranger = build(new_user("a@x.com"), 4).unwrap();

        let err = replace(&mut users, &stranger).unwrap_err();
        assert!(matches!(err, StorageError::UserNotFound(_)));
    }

    #[test]
    fn authenticate_checks_password() {
        let mut users = Vec::new();
        insert(&mut users, build(new_user("a@x.com"), 4).unwrap()).unwrap();

        assert!(authenticate(&users, "a@x.com", "hunter2").is_some());
        assert!(authenticate(&users, "a@x.com", "wrong").is_none());
        assert!(authenticate(&users, "nobody@x.com", "hunter2").is_none());
    }

    #[test]
    fn authenticate_treats_corrupt_hash_as_failure() {
        let mut user = build(new_user("a@x.com"), 4).unwrap();
        user.password_hash = "plain-text".to_string();

        assert!(authenticate(&[user], "a@x.com", "plain-text").is_none());
    }
}
