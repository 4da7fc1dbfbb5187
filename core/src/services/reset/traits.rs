//! Traits for email delivery integration

use async_trait::async_trait;
use uuid::Uuid;

/// Trait for the outbound email collaborator
///
/// Implementations (SMTP, provider API) live in the infrastructure layer;
/// templates and transport are not this crate's concern.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a password reset code to a tenant
    ///
    /// # Arguments
    /// * `email` - Recipient address
    /// * `recipient_name` - Display name used in the greeting
    /// * `reset_id` - Identifier the recipient must present together with the code
    /// * `code` - The 6-digit reset code
    ///
    /// # Returns
    /// * `Ok(String)` - Provider message id
    /// * `Err(String)` - Delivery failure description
    async fn send_reset_code(
        &self,
        email: &str,
        recipient_name: &str,
        reset_id: Uuid,
        code: &str,
    ) -> Result<String, String>;
}
