//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Repository trait for refresh token persistence operations
///
/// This is the revocation storage behind refresh token rotation. Tokens are
/// stored hashed; the plain token string never reaches an implementation.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - The saved record
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token hash)
    async fn save_refresh_token(
        &self,
        record: RefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, DomainError>;

    /// Find a refresh token record by its hashed value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Record found
    /// * `Ok(None)` - No record with the given hash
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Find all valid refresh token records for a tenant
    async fn find_by_tenant_id(
        &self,
        tenant_id: Uuid,
    ) -> Result<Vec<RefreshTokenRecord>, DomainError>;

    /// Revoke a specific refresh token
    ///
    /// # Returns
    /// * `Ok(true)` - Token was revoked
    /// * `Ok(false)` - Token not found
    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Revoke all refresh tokens for a tenant
    ///
    /// Used on logout-everywhere and when refresh token reuse is detected.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens revoked
    async fn revoke_all_tenant_tokens(&self, tenant_id: Uuid) -> Result<usize, DomainError>;

    /// Delete expired refresh token records
    ///
    /// Should be called periodically to keep the store bounded.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;

    /// Check if a token exists and is valid (not expired, not revoked)
    async fn is_token_valid(&self, token_hash: &str) -> Result<bool, DomainError> {
        match self.find_refresh_token(token_hash).await? {
            Some(record) => Ok(record.is_valid()),
            None => Ok(false),
        }
    }
}
