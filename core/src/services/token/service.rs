//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use tenant_shared::utils::validation::validators;

use crate::domain::entities::tenant::TenantRole;
use crate::domain::entities::token::{
    Claims, RefreshTokenRecord, TokenPair, JWT_AUDIENCE, JWT_ISSUER,
};
use crate::errors::{DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for issuing, validating, and refreshing JWT token pairs
///
/// Issuance and validation are pure apart from the refresh token store: the
/// signing keys are loaded once at construction and every call may run
/// concurrently with any other.
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Refresh token store used for rotation and revocation
    /// * `config` - Immutable token service configuration
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // A token one second past its expiry must already be rejected
        validation.leeway = 0;

        Self {
            repository,
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        }
    }

    /// Issues a new token pair (access + refresh tokens) for a tenant
    ///
    /// The refresh token is stored hashed so that it can be rotated and
    /// revoked later; the access token is never persisted.
    ///
    /// # Arguments
    ///
    /// * `tenant_id` - The tenant's UUID
    /// * `email` - The tenant's email address, carried in the claims
    /// * `role` - The tenant's role, carried in the claims
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The signed token pair
    /// * `Err(DomainError)` - Invalid principal or token generation failed
    pub async fn issue_tokens(
        &self,
        tenant_id: Uuid,
        email: &str,
        role: Option<TenantRole>,
    ) -> DomainResult<TokenPair> {
        if tenant_id.is_nil() {
            return Err(DomainError::Validation {
                message: "Tenant id must not be nil".to_string(),
            });
        }
        if !validators::not_empty(email) {
            return Err(DomainError::ValidationErr(ValidationError::RequiredField {
                field: "email".to_string(),
            }));
        }

        let role_claim = role.map(|r| r.as_str().to_string());

        let access_claims = Claims::new_access_token(
            tenant_id,
            email.to_string(),
            role_claim.clone(),
            self.config.access_token_expiry_minutes,
        );
        let access_token = self.encode_access_jwt(&access_claims)?;

        let refresh_claims = Claims::new_refresh_token(
            tenant_id,
            email.to_string(),
            role_claim,
            self.config.refresh_token_expiry_days,
        );
        let refresh_token = self.encode_refresh_jwt(&refresh_claims)?;

        let record = RefreshTokenRecord::new(
            tenant_id,
            refresh_claims.jti.clone(),
            self.hash_token(&refresh_token),
            self.config.refresh_token_expiry_days,
        );
        self.repository
            .save_refresh_token(record)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        tracing::debug!(tenant_id = %tenant_id, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_minutes,
            self.config.refresh_token_expiry_days,
        ))
    }

    /// Validates an access token and returns its claims
    ///
    /// Pure and synchronous: signature, expiry (zero leeway), not-before,
    /// issuer, and audience are all checked against the access secret.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is expired, malformed, or the signature
    ///   does not verify
    pub fn validate_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.access_decoding_key, &self.validation)
            .map_err(map_decode_error)?;
        Ok(token_data.claims)
    }

    /// Refreshes a token pair, rotating the refresh token
    ///
    /// The presented refresh token must verify against the refresh secret,
    /// be known to the store, and be neither expired nor revoked. On
    /// success the old token is revoked and a fresh pair is issued.
    /// Presenting an already-rotated token is treated as reuse: every
    /// outstanding token of that tenant is revoked.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New token pair
    /// * `Err(DomainError)` - Token expired, revoked, or invalid
    pub async fn refresh_tokens(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let token_data = decode::<Claims>(
            refresh_token,
            &self.refresh_decoding_key,
            &self.validation,
        )
        .map_err(map_decode_error)?;
        let claims = token_data.claims;

        let tenant_id = claims
            .tenant_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        let token_hash = self.hash_token(refresh_token);
        let record = self
            .repository
            .find_refresh_token(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidTokenFormat))?;

        if record.is_revoked {
            // A rotated token presented again is a reuse attack; revoke the
            // tenant's outstanding tokens
            let _ = self
                .repository
                .revoke_all_tenant_tokens(record.tenant_id)
                .await;
            tracing::warn!(
                tenant_id = %record.tenant_id,
                "refresh token reuse detected, revoked outstanding tokens"
            );
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        if record.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        let role = claims
            .role
            .as_deref()
            .and_then(|r| r.parse::<TenantRole>().ok());
        let pair = self.issue_tokens(tenant_id, &claims.email, role).await?;

        // Rotate: the presented token is spent once the new pair exists
        let _ = self.repository.revoke_token(&token_hash).await;

        tracing::debug!(tenant_id = %tenant_id, "rotated refresh token");

        Ok(pair)
    }

    /// Revokes a specific refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - True if the token was revoked, false if not found
    pub async fn revoke_refresh_token(&self, token: &str) -> DomainResult<bool> {
        let token_hash = self.hash_token(token);
        self.repository.revoke_token(&token_hash).await
    }

    /// Revokes all refresh tokens for a tenant
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tokens revoked
    pub async fn revoke_tenant_tokens(&self, tenant_id: Uuid) -> DomainResult<usize> {
        self.repository.revoke_all_tenant_tokens(tenant_id).await
    }

    /// Removes expired refresh token records from storage
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records cleaned up
    pub async fn cleanup_expired_tokens(&self) -> DomainResult<usize> {
        self.repository.delete_expired_tokens().await
    }

    /// Encodes claims into an access JWT
    pub(crate) fn encode_access_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.access_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Encodes claims into a refresh JWT
    pub(crate) fn encode_refresh_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.refresh_encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Hashes a token for storage lookup
    pub(crate) fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Maps jsonwebtoken decode failures onto the domain token errors
fn map_decode_error(error: jsonwebtoken::errors::Error) -> DomainError {
    use jsonwebtoken::errors::ErrorKind;

    let token_error = match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::InvalidTokenFormat,
    };
    DomainError::Token(token_error)
}
