//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}
