//! Main password reset service implementation

use std::sync::Arc;

use uuid::Uuid;

use tenant_shared::utils::validation::validators;

use crate::domain::entities::reset_code::{
    PasswordResetCode, DEFAULT_RESET_CODE_EXPIRY_MINUTES,
};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::TenantRepository;
use crate::services::auth::hash_password;

use super::traits::EmailServiceTrait;

/// Configuration for the password reset service
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Bcrypt cost factor for the replacement password
    pub bcrypt_cost: u32,
    /// Reset code validity window in minutes
    pub code_expiry_minutes: i64,
    /// Minimum accepted password length
    pub min_password_length: usize,
    /// Maximum accepted password length
    pub max_password_length: usize,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            code_expiry_minutes: DEFAULT_RESET_CODE_EXPIRY_MINUTES,
            min_password_length: 8,
            max_password_length: 72,
        }
    }
}

/// Service for the email-based password recovery flow
pub struct PasswordResetService<P, E>
where
    P: TenantRepository,
    E: EmailServiceTrait,
{
    /// Tenant repository for principal lookup and reset code persistence
    tenant_repository: Arc<P>,
    /// Email collaborator delivering the reset codes
    email_service: Arc<E>,
    /// Service configuration
    config: PasswordResetConfig,
}

impl<P, E> PasswordResetService<P, E>
where
    P: TenantRepository,
    E: EmailServiceTrait,
{
    /// Create a new password reset service
    pub fn new(tenant_repository: Arc<P>, email_service: Arc<E>, config: PasswordResetConfig) -> Self {
        Self {
            tenant_repository,
            email_service,
            config,
        }
    }

    /// Start a password reset for the tenant registered under `email`
    ///
    /// Generates a reset code, persists it, and dispatches it through the
    /// email collaborator.
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - Reset id the tenant must present with the code
    /// * `Err(DomainError)` - Unknown email or delivery failure
    pub async fn request_reset(&self, email: &str) -> DomainResult<Uuid> {
        let tenant = self
            .tenant_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::TenantNotFound)?;

        let code = PasswordResetCode::new_with_expiration(tenant.id, self.config.code_expiry_minutes);
        let code = self.tenant_repository.save_reset_code(code).await?;

        self.email_service
            .send_reset_code(&tenant.email, &tenant.name, code.id, &code.code)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to send reset email: {}", e),
            })?;

        tracing::info!(
            tenant_id = %tenant.id,
            reset_id = %code.id,
            "password reset code sent"
        );

        Ok(code.id)
    }

    /// Complete a password reset
    ///
    /// The reset id and code must match a stored, unused, unexpired code.
    /// On success the new password is hashed and stored and the code is
    /// marked used.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Password updated
    /// * `Err(DomainError)` - Wrong or expired code, or invalid password
    pub async fn confirm_reset(
        &self,
        reset_id: Uuid,
        code: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !validators::length_between(
            new_password,
            self.config.min_password_length,
            self.config.max_password_length,
        ) {
            return Err(ValidationError::InvalidLength {
                field: "new_password".to_string(),
                min: self.config.min_password_length,
                max: self.config.max_password_length,
            }
            .into());
        }

        let record = self
            .tenant_repository
            .find_reset_code(reset_id, code)
            .await?
            .ok_or(AuthError::InvalidResetCode)?;

        if record.is_used {
            return Err(AuthError::InvalidResetCode.into());
        }
        if record.is_expired() {
            return Err(AuthError::ResetCodeExpired.into());
        }

        let password_hash = hash_password(new_password, self.config.bcrypt_cost)?;
        self.tenant_repository
            .update_password(record.tenant_id, &password_hash)
            .await?;
        self.tenant_repository.mark_reset_code_used(record.id).await?;

        tracing::info!(tenant_id = %record.tenant_id, "tenant password reset");

        Ok(())
    }
}
