//! Mock implementation of TenantRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::reset_code::PasswordResetCode;
use crate::domain::entities::tenant::Tenant;
use crate::errors::DomainError;

use super::r#trait::TenantRepository;

/// In-memory tenant repository for testing
pub struct MockTenantRepository {
    tenants: Arc<RwLock<HashMap<Uuid, Tenant>>>,
    reset_codes: Arc<RwLock<HashMap<Uuid, PasswordResetCode>>>,
}

impl MockTenantRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tenants: Arc::new(RwLock::new(HashMap::new())),
            reset_codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing tenant
    pub async fn with_tenant(self, tenant: Tenant) -> Self {
        self.tenants.write().await.insert(tenant.id, tenant);
        self
    }
}

impl Default for MockTenantRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TenantRepository for MockTenantRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Tenant>, DomainError> {
        let tenants = self.tenants.read().await;
        Ok(tenants.values().find(|t| t.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DomainError> {
        let tenants = self.tenants.read().await;
        Ok(tenants.get(&id).cloned())
    }

    async fn insert_tenant(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
        let mut tenants = self.tenants.write().await;

        if tenants.values().any(|t| t.email == tenant.email) {
            return Err(DomainError::Validation {
                message: "Tenant already exists".to_string(),
            });
        }

        tenants.insert(tenant.id, tenant.clone());
        Ok(tenant)
    }

    async fn update_password(
        &self,
        tenant_id: Uuid,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let mut tenants = self.tenants.write().await;

        match tenants.get_mut(&tenant_id) {
            Some(tenant) => {
                tenant.update_password(password_hash.to_string());
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("tenant {}", tenant_id),
            }),
        }
    }

    async fn update_last_login(&self, tenant_id: Uuid) -> Result<(), DomainError> {
        let mut tenants = self.tenants.write().await;

        match tenants.get_mut(&tenant_id) {
            Some(tenant) => {
                tenant.update_last_login();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("tenant {}", tenant_id),
            }),
        }
    }

    async fn save_reset_code(
        &self,
        code: PasswordResetCode,
    ) -> Result<PasswordResetCode, DomainError> {
        let mut reset_codes = self.reset_codes.write().await;
        reset_codes.insert(code.id, code.clone());
        Ok(code)
    }

    async fn find_reset_code(
        &self,
        reset_id: Uuid,
        code: &str,
    ) -> Result<Option<PasswordResetCode>, DomainError> {
        let reset_codes = self.reset_codes.read().await;
        Ok(reset_codes
            .get(&reset_id)
            .filter(|r| r.matches(code))
            .cloned())
    }

    async fn mark_reset_code_used(&self, reset_id: Uuid) -> Result<bool, DomainError> {
        let mut reset_codes = self.reset_codes.write().await;

        if let Some(code) = reset_codes.get_mut(&reset_id) {
            code.mark_used();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
