//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token repository for testing, keyed by token hash
pub struct MockTokenRepository {
    records: Arc<RwLock<HashMap<String, RefreshTokenRecord>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Count valid (non-expired, non-revoked) records for a tenant
    pub async fn count_valid_tokens(&self, tenant_id: Uuid) -> usize {
        let records = self.records.read().await;
        records
            .values()
            .filter(|r| r.tenant_id == tenant_id && r.is_valid())
            .count()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(
        &self,
        record: RefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, DomainError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.token_hash) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        records.insert(record.token_hash.clone(), record.clone());
        Ok(record)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(token_hash).cloned())
    }

    async fn find_by_tenant_id(
        &self,
        tenant_id: Uuid,
    ) -> Result<Vec<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.tenant_id == tenant_id && r.is_valid())
            .cloned()
            .collect())
    }

    async fn revoke_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        if let Some(record) = records.get_mut(token_hash) {
            record.revoke();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn revoke_all_tenant_tokens(&self, tenant_id: Uuid) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let mut count = 0;

        for record in records.values_mut() {
            if record.tenant_id == tenant_id && !record.is_revoked {
                record.revoke();
                count += 1;
            }
        }

        Ok(count)
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();

        records.retain(|_, record| !record.is_expired());

        Ok(initial_count - records.len())
    }
}
