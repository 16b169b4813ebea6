//! Password hashing
//!
//! Stores keep bcrypt hashes only. Callers never see or compare them.

use crate::error::Result;

/// Cost used when no configuration overrides it
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a password using bcrypt
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if `hash` is not a bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let hash = hash_password("my_secure_password", 4).unwrap();

        assert!(hash.starts_with("$2b$") || hash.starts_with("$2a$"));
        assert!(verify_password("my_secure_password", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same", 4).unwrap();
        let b = hash_password("same", 4).unwrap();
        assert_ne!(a, b, "Hashes should differ due to random salt");
    }

    #[test]
    fn test_invalid_hash_is_an_error() {
        assert!(verify_password("password", "not-a-valid-hash").is_err());
    }
}
