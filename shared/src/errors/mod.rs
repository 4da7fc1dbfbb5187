//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details),
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    // Authentication
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const INCORRECT_PASSWORD: &str = "INCORRECT_PASSWORD";
    pub const TENANT_NOT_FOUND: &str = "TENANT_NOT_FOUND";
    pub const TENANT_ALREADY_EXISTS: &str = "TENANT_ALREADY_EXISTS";
    pub const INVALID_RESET_CODE: &str = "INVALID_RESET_CODE";
    pub const RESET_CODE_EXPIRED: &str = "RESET_CODE_EXPIRED";

    // Tokens
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const INVALID_TOKEN_FORMAT: &str = "INVALID_TOKEN_FORMAT";
    pub const INVALID_SIGNATURE: &str = "INVALID_SIGNATURE";
    pub const TOKEN_NOT_YET_VALID: &str = "TOKEN_NOT_YET_VALID";
    pub const INVALID_CLAIMS: &str = "INVALID_CLAIMS";
    pub const TOKEN_REVOKED: &str = "TOKEN_REVOKED";
    pub const TOKEN_GENERATION_FAILED: &str = "TOKEN_GENERATION_FAILED";

    // General
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_creation() {
        let response = ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Token expired");
        assert_eq!(response.error, "TOKEN_EXPIRED");
        assert_eq!(response.message, "Token expired");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_details() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Validation failed")
            .add_detail("field", "email");

        let details = response.details.expect("details should be present");
        assert_eq!(details["field"], "email");
    }
}
