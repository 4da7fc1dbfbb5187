//! Authentication response value object for login and refresh flows.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;

/// Authentication response containing tokens and tenant metadata
///
/// Returned after a successful login or token refresh:
/// - JWT access and refresh tokens
/// - Access token expiration time
/// - Tenant role carried in the token claims
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// Tenant role ("admin" or "member"), if carried in the claims
    pub role: Option<String>,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        role: Option<String>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            role,
        }
    }

    /// Creates an authentication response from a token pair
    pub fn from_token_pair(token_pair: TokenPair, role: Option<String>) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_pair() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string(), 15, 7);
        let response = AuthResponse::from_token_pair(pair, Some("admin".to_string()));

        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, "refresh");
        assert_eq!(response.expires_in, 15 * 60);
        assert_eq!(response.role, Some("admin".to_string()));
    }
}
