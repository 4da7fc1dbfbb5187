//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
    /// Weekly usage quota granted to newly registered tenants
    pub default_weekly_quota: i64,
    /// Minimum accepted password length
    pub min_password_length: usize,
    /// Maximum accepted password length (bcrypt truncates beyond 72 bytes)
    pub max_password_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            default_weekly_quota: 125,
            min_password_length: 8,
            max_password_length: 72,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthServiceConfig::default();
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.default_weekly_quota, 125);
        assert_eq!(config.min_password_length, 8);
    }
}
