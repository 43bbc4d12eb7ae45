//! bcrypt password hashing.
//!
//! The work factor is passed in by the caller so that tests can run with the
//! minimum cost while production uses the configured one.

use anyhow::anyhow;
use bcrypt::{hash, verify};

use crate::errors::AppError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("admin123", TEST_COST).unwrap();
        let second = hash_password("admin123", TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify_password("admin123", &first).unwrap());
        assert!(verify_password("admin123", &second).unwrap());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("secret1", TEST_COST).unwrap();
        assert!(!hash.contains("secret1"));
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let err = hash_password("secret1", 99).unwrap_err();
        assert!(err.status.is_server_error());
    }
}
