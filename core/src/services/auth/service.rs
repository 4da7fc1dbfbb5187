//! Main authentication service implementation

use std::sync::Arc;

use tenant_shared::utils::validation::validators;

use crate::domain::entities::tenant::Tenant;
use crate::domain::entities::token::Claims;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{TenantRepository, TokenRepository};
use crate::services::token::TokenService;

use super::api_key::generate_api_key;
use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Authentication service for the tenant login, signup, and session flow
pub struct AuthService<P, T>
where
    P: TenantRepository,
    T: TokenRepository,
{
    /// Tenant repository for principal lookup and registration
    pub(crate) tenant_repository: Arc<P>,
    /// Token service for JWT management
    token_service: Arc<TokenService<T>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<P, T> AuthService<P, T>
where
    P: TenantRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `tenant_repository` - Repository for tenant data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        tenant_repository: Arc<P>,
        token_service: Arc<TokenService<T>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            tenant_repository,
            token_service,
            config,
        }
    }

    /// Register a new tenant
    ///
    /// Validates the signup fields, rejects duplicate emails, hashes the
    /// password, and generates the tenant api key.
    ///
    /// # Returns
    ///
    /// * `Ok(Tenant)` - The registered tenant
    /// * `Err(DomainError)` - Validation failed or the email is taken
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> DomainResult<Tenant> {
        if !validators::not_empty(name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if !validators::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !validators::length_between(
            password,
            self.config.min_password_length,
            self.config.max_password_length,
        ) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: self.config.min_password_length,
                max: self.config.max_password_length,
            }
            .into());
        }

        if self.tenant_repository.email_exists(email).await? {
            return Err(AuthError::TenantAlreadyExists.into());
        }

        let password_hash = hash_password(password, self.config.bcrypt_cost)?;
        let tenant = Tenant::new(
            name.to_string(),
            email.to_string(),
            phone_number.to_string(),
            generate_api_key(),
            password_hash,
            self.config.default_weekly_quota,
        );

        let tenant = self.tenant_repository.insert_tenant(tenant).await?;
        tracing::info!(tenant_id = %tenant.id, "tenant signed up");

        Ok(tenant)
    }

    /// Authenticate a tenant and issue a token pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Tokens for the authenticated tenant
    /// * `Err(DomainError)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let tenant = self
            .tenant_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &tenant.password_hash)? {
            return Err(AuthError::IncorrectPassword.into());
        }

        let pair = self
            .token_service
            .issue_tokens(tenant.id, &tenant.email, Some(tenant.role))
            .await?;

        // Login succeeded even if the stamp cannot be written
        let _ = self.tenant_repository.update_last_login(tenant.id).await;

        tracing::info!(tenant_id = %tenant.id, "tenant logged in");

        Ok(AuthResponse::from_token_pair(
            pair,
            Some(tenant.role.as_str().to_string()),
        ))
    }

    /// Validate an access token and return its claims
    pub fn validate_token(&self, token: &str) -> DomainResult<Claims> {
        self.token_service.validate_access_token(token)
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let pair = self.token_service.refresh_tokens(refresh_token).await?;
        let claims = self.token_service.validate_access_token(&pair.access_token)?;

        Ok(AuthResponse::from_token_pair(pair, claims.role))
    }

    /// Invalidate a refresh token
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - True if the token was revoked, false if unknown
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<bool> {
        let revoked = self.token_service.revoke_refresh_token(refresh_token).await?;
        if revoked {
            tracing::info!("tenant logged out");
        }
        Ok(revoked)
    }
}
