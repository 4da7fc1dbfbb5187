//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token expiration time (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Default refresh token expiration time (7 days)
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "tenant-service";

/// JWT audience
pub const JWT_AUDIENCE: &str = "tenant-service-api";

/// Claims structure for JWT payload
///
/// The same shape is used for access and refresh tokens; they differ in
/// lifetime and signing secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (tenant ID)
    pub sub: String,

    /// Email address of the tenant user
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Tenant role, if set
    pub role: Option<String>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `tenant_id` - The tenant's UUID
    /// * `email` - The tenant's email address
    /// * `role` - The tenant's role in claim form
    /// * `expiry_minutes` - Configured access token lifetime
    pub fn new_access_token(
        tenant_id: Uuid,
        email: String,
        role: Option<String>,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: tenant_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            role,
        }
    }

    /// Creates new claims for a refresh token
    ///
    /// # Arguments
    ///
    /// * `tenant_id` - The tenant's UUID
    /// * `email` - The tenant's email address
    /// * `role` - The tenant's role, carried so rotation can preserve it
    /// * `expiry_days` - Configured refresh token lifetime
    pub fn new_refresh_token(
        tenant_id: Uuid,
        email: String,
        role: Option<String>,
        expiry_days: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(expiry_days);

        Self {
            sub: tenant_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            role,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are valid (not expired and after nbf)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Gets the tenant ID from the claims
    pub fn tenant_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Stored representation of an issued refresh token
///
/// The token itself is never persisted; only its SHA-256 hash is, together
/// with the revocation flag that backs rotation and logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Tenant this token belongs to
    pub tenant_id: Uuid,

    /// JWT ID of the refresh token
    pub jti: String,

    /// Hashed token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked
    pub is_revoked: bool,
}

impl RefreshTokenRecord {
    /// Creates a new refresh token record
    pub fn new(tenant_id: Uuid, jti: String, token_hash: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::days(expiry_days);

        Self {
            id: Uuid::new_v4(),
            tenant_id,
            jti,
            token_hash,
            created_at: now,
            expires_at,
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the refresh token is valid
    ///
    /// A token is valid if it hasn't expired and hasn't been revoked.
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with expiry times derived from configuration
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expiry_minutes: i64,
        refresh_expiry_days: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_expiry_minutes * 60,
            refresh_expires_in: refresh_expiry_days * 24 * 60 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let tenant_id = Uuid::new_v4();
        let claims = Claims::new_access_token(
            tenant_id,
            "admin@acme.example".to_string(),
            Some("admin".to_string()),
            DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
        );

        assert_eq!(claims.sub, tenant_id.to_string());
        assert_eq!(claims.email, "admin@acme.example");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.role, Some("admin".to_string()));
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_claims_outlive_access_claims() {
        let tenant_id = Uuid::new_v4();
        let access = Claims::new_access_token(
            tenant_id,
            "admin@acme.example".to_string(),
            None,
            DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
        );
        let refresh = Claims::new_refresh_token(
            tenant_id,
            "admin@acme.example".to_string(),
            None,
            DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS,
        );

        assert!(refresh.exp > access.exp);
        assert_ne!(access.jti, refresh.jti);
    }

    #[test]
    fn test_claims_tenant_id_parsing() {
        let tenant_id = Uuid::new_v4();
        let claims = Claims::new_access_token(tenant_id, "a@b.co".to_string(), None, 15);

        assert_eq!(claims.tenant_id().unwrap(), tenant_id);
    }

    #[test]
    fn test_claims_expiration() {
        let tenant_id = Uuid::new_v4();
        let mut claims = Claims::new_access_token(tenant_id, "a@b.co".to_string(), None, 15);

        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_not_before() {
        let tenant_id = Uuid::new_v4();
        let mut claims = Claims::new_access_token(tenant_id, "a@b.co".to_string(), None, 15);

        claims.nbf = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_refresh_token_record_creation() {
        let tenant_id = Uuid::new_v4();
        let record = RefreshTokenRecord::new(
            tenant_id,
            Uuid::new_v4().to_string(),
            "hashed_token_value".to_string(),
            DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS,
        );

        assert_eq!(record.tenant_id, tenant_id);
        assert!(!record.is_revoked);
        assert!(!record.is_expired());
        assert!(record.is_valid());
    }

    #[test]
    fn test_refresh_token_record_revocation() {
        let mut record = RefreshTokenRecord::new(
            Uuid::new_v4(),
            Uuid::new_v4().to_string(),
            "hash".to_string(),
            7,
        );

        assert!(record.is_valid());
        record.revoke();
        assert!(record.is_revoked);
        assert!(!record.is_valid());
    }

    #[test]
    fn test_refresh_token_record_expiration() {
        let mut record = RefreshTokenRecord::new(
            Uuid::new_v4(),
            Uuid::new_v4().to_string(),
            "hash".to_string(),
            7,
        );

        record.expires_at = Utc::now() - Duration::days(1);

        assert!(record.is_expired());
        assert!(!record.is_valid());
    }

    #[test]
    fn test_token_pair_expiry_spans() {
        let pair = TokenPair::new(
            "access_token_jwt".to_string(),
            "refresh_token_jwt".to_string(),
            60,
            7,
        );

        assert_eq!(pair.access_expires_in, 60 * 60);
        assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access_token(
            Uuid::new_v4(),
            "admin@acme.example".to_string(),
            Some("member".to_string()),
            15,
        );

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
