//! Shared utilities and common types for the tenant service backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (validation, etc.)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
pub use errors::{error_codes, ErrorResponse};
pub use utils::validation;
