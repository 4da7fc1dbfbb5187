//! Tenant api-key generation

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of a generated tenant api key
pub const API_KEY_LENGTH: usize = 32;

/// Generates a new tenant api key
///
/// The key is the hex SHA-256 digest of the current timestamp plus random
/// material, truncated to [`API_KEY_LENGTH`] characters.
pub fn generate_api_key() -> String {
    let timestamp = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .to_string();
    let random_data: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(API_KEY_LENGTH)
        .map(char::from)
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(random_data.as_bytes());
    let digest = hex::encode(hasher.finalize());

    digest[..API_KEY_LENGTH].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_api_key_shape() {
        let key = generate_api_key();

        assert_eq!(key.len(), API_KEY_LENGTH);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_api_keys_are_unique() {
        let keys: HashSet<String> = (0..100).map(|_| generate_api_key()).collect();
        assert_eq!(keys.len(), 100);
    }
}
