//! Domain-specific error types for authentication and token operations
//!
//! All failures here are caller-visible rejections: nothing is retried or
//! recovered internally, and none of them are fatal to the process.

use tenant_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Tenant not found")]
    TenantNotFound,

    #[error("Tenant with this email already exists")]
    TenantAlreadyExists,

    #[error("Invalid reset code")]
    InvalidResetCode,

    #[error("Reset code expired")]
    ResetCodeExpired,
}

/// Token-related errors
///
/// `TokenExpired`, `TokenRevoked`, and the two invalid-token variants cover
/// the three rejection kinds the token service can produce: expired,
/// revoked, and invalid (malformed or signature mismatch).
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid length for field: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::IncorrectPassword => error_codes::INCORRECT_PASSWORD,
            AuthError::TenantNotFound => error_codes::TENANT_NOT_FOUND,
            AuthError::TenantAlreadyExists => error_codes::TENANT_ALREADY_EXISTS,
            AuthError::InvalidResetCode => error_codes::INVALID_RESET_CODE,
            AuthError::ResetCodeExpired => error_codes::RESET_CODE_EXPIRED,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::InvalidTokenFormat => error_codes::INVALID_TOKEN_FORMAT,
            TokenError::InvalidSignature => error_codes::INVALID_SIGNATURE,
            TokenError::TokenNotYetValid => error_codes::TOKEN_NOT_YET_VALID,
            TokenError::InvalidClaims => error_codes::INVALID_CLAIMS,
            TokenError::TokenRevoked => error_codes::TOKEN_REVOKED,
            TokenError::TokenGenerationFailed => error_codes::TOKEN_GENERATION_FAILED,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, err.to_string());
        match err {
            ValidationError::RequiredField { field } => response.add_detail("field", field),
            ValidationError::InvalidEmail => response.add_detail("field", "email"),
            ValidationError::InvalidLength { field, .. } => response.add_detail("field", field),
        }
    }
}

/// Convert DomainError to ErrorResponse
impl From<super::DomainError> for ErrorResponse {
    fn from(err: super::DomainError) -> Self {
        use super::DomainError;

        match err {
            DomainError::Auth(e) => e.into(),
            DomainError::Token(e) => e.into(),
            DomainError::ValidationErr(e) => e.into(),
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
            }
            DomainError::NotFound { resource } => ErrorResponse::new(
                error_codes::NOT_FOUND,
                format!("Resource not found: {}", resource),
            ),
            DomainError::Unauthorized => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Unauthorized access")
            }
            DomainError::Internal { message } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, message)
            }
        }
    }
}
