//! Configuration for the token service

use jsonwebtoken::Algorithm;
use std::str::FromStr;

use tenant_shared::config::JwtConfig;

use crate::errors::DomainError;

/// Configuration for the token service
///
/// An immutable snapshot passed to the service constructor; nothing here is
/// read from ambient state after startup.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub jwt_secret: String,
    /// Secret for signing refresh tokens
    pub refresh_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            refresh_secret: "development-refresh-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl TokenServiceConfig {
    /// Build a service configuration from the shared JWT configuration
    ///
    /// Fails when the configured algorithm identifier is unknown or is not
    /// an HMAC algorithm (keys are loaded from symmetric secrets here).
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::Validation {
                message: format!("Unknown signing algorithm: {}", config.algorithm),
            }
        })?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Validation {
                message: format!(
                    "Signing algorithm {} requires asymmetric keys, only HMAC is supported",
                    config.algorithm
                ),
            });
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            algorithm,
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
        })
    }
}
