//! Password hashing helpers built on bcrypt

use crate::errors::{DomainError, DomainResult};

/// Hashes a plaintext password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verifies a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, password_hash).map_err(|e| DomainError::Internal {
        message: format!("Password verification failed: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("correct horse battery staple", TEST_COST).unwrap();

        assert_ne!(hash, "correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("password123", TEST_COST).unwrap();
        let second = hash_password("password123", TEST_COST).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("password123", "not-a-bcrypt-hash").is_err());
    }
}
