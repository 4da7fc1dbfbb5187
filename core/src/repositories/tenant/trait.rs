//! Tenant repository trait defining the interface for tenant persistence.
//!
//! This is the user-store collaborator of the authentication services. The
//! concrete implementation lives in the infrastructure layer; this trait
//! keeps the domain independent of the storage technology.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::reset_code::PasswordResetCode;
use crate::domain::entities::tenant::Tenant;
use crate::errors::DomainError;

/// Repository trait for Tenant entity persistence operations
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Find a tenant by email address
    ///
    /// Email is the login identifier, so this is the principal lookup used
    /// by the authentication flow.
    ///
    /// # Returns
    /// * `Ok(Some(Tenant))` - Tenant found
    /// * `Ok(None)` - No tenant with the given email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Tenant>, DomainError>;

    /// Find a tenant by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DomainError>;

    /// Persist a new tenant
    ///
    /// # Returns
    /// * `Ok(Tenant)` - The saved tenant
    /// * `Err(DomainError)` - Save failed (e.g., duplicate email)
    async fn insert_tenant(&self, tenant: Tenant) -> Result<Tenant, DomainError>;

    /// Replace a tenant's password hash
    async fn update_password(&self, tenant_id: Uuid, password_hash: &str)
        -> Result<(), DomainError>;

    /// Stamp a tenant's last login time
    async fn update_last_login(&self, tenant_id: Uuid) -> Result<(), DomainError>;

    /// Persist a password reset code
    async fn save_reset_code(
        &self,
        code: PasswordResetCode,
    ) -> Result<PasswordResetCode, DomainError>;

    /// Find a reset code by its id and code value
    ///
    /// Both must match; a wrong code for a known id returns `Ok(None)`.
    async fn find_reset_code(
        &self,
        reset_id: Uuid,
        code: &str,
    ) -> Result<Option<PasswordResetCode>, DomainError>;

    /// Mark a reset code as used
    ///
    /// # Returns
    /// * `Ok(true)` - Code was marked used
    /// * `Ok(false)` - Code not found
    async fn mark_reset_code_used(&self, reset_id: Uuid) -> Result<bool, DomainError>;

    /// Check whether a tenant is registered under the given email
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
