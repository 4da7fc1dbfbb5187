//! Password reset code entity for email-based password recovery.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the reset verification code
pub const RESET_CODE_LENGTH: usize = 6;

/// Default expiration time for reset codes (15 minutes)
pub const DEFAULT_RESET_CODE_EXPIRY_MINUTES: i64 = 15;

/// Password reset code entity
///
/// A code is delivered to the tenant by email and is accepted once, within
/// its expiry window, together with the reset id it was stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetCode {
    /// Unique identifier for the reset request
    pub id: Uuid,

    /// Tenant this reset code was issued for
    pub tenant_id: Uuid,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub is_used: bool,
}

impl PasswordResetCode {
    /// Creates a new reset code with the default expiration
    pub fn new(tenant_id: Uuid) -> Self {
        Self::new_with_expiration(tenant_id, DEFAULT_RESET_CODE_EXPIRY_MINUTES)
    }

    /// Creates a new reset code with a custom expiration time
    pub fn new_with_expiration(tenant_id: Uuid, expiration_minutes: i64) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            id: Uuid::new_v4(),
            tenant_id,
            code,
            created_at: now,
            expires_at,
            is_used: false,
        }
    }

    /// Generates a random zero-padded 6-digit code
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the reset code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the reset code can still be redeemed
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_used
    }

    /// Checks a candidate code against the stored one
    pub fn matches(&self, candidate: &str) -> bool {
        self.code == candidate
    }

    /// Marks the code as used
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}
