//! Authentication and token signing configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// Access and refresh tokens are signed with separate secrets so that an
/// access token can never be replayed against the refresh endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub secret: String,

    /// Secret key for signing refresh tokens
    pub refresh_secret: String,

    /// Algorithm identifier for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token expiry time in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry time in days
    pub refresh_token_expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    #[serde(default)]
    pub audience: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            refresh_secret: String::from("development-refresh-secret-please-change-in-production"),
            algorithm: default_algorithm(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
            issuer: String::from("tenant-service"),
            audience: None,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// Reads the variable names the deployment supplies:
    /// `JWT_TOKEN_SECRET_KEY`, `JWT_REFRESH_TOKEN_SECRET_KEY`,
    /// `JWT_TOKEN_ALGORITHM`, `ACCESS_TOKEN_EXPIRY_MINUTES`,
    /// `REFRESH_TOKEN_EXPIRY_DAYS`.
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();

        let secret = std::env::var("JWT_TOKEN_SECRET_KEY").unwrap_or(defaults.secret);
        let refresh_secret =
            std::env::var("JWT_REFRESH_TOKEN_SECRET_KEY").unwrap_or(defaults.refresh_secret);
        let algorithm = std::env::var("JWT_TOKEN_ALGORITHM").unwrap_or(defaults.algorithm);
        let access_token_expiry_minutes = std::env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry_minutes);
        let refresh_token_expiry_days = std::env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expiry_days);

        Self {
            jwt: JwtConfig {
                secret,
                refresh_secret,
                algorithm,
                access_token_expiry_minutes,
                refresh_token_expiry_days,
                issuer: defaults.issuer,
                audience: defaults.audience,
            },
        }
    }

    /// Get JWT secret (convenience accessor)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }

    /// Get access token expiry in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.jwt.access_token_expiry_minutes * 60
    }

    /// Get refresh token expiry in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.jwt.refresh_token_expiry_days * 86400
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
