//! Tenant entity representing a registered tenant-application user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default weekly usage quota granted to new tenants
pub const DEFAULT_WEEKLY_QUOTA: i64 = 125;

/// Role of a tenant user within the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantRole {
    /// Account owner with full administrative access
    Admin,
    /// Regular member of a tenant account
    Member,
}

impl TenantRole {
    /// String form used in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantRole::Admin => "admin",
            TenantRole::Member => "member",
        }
    }
}

impl std::str::FromStr for TenantRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(TenantRole::Admin),
            "member" => Ok(TenantRole::Member),
            _ => Err(format!("Invalid tenant role: {}", s)),
        }
    }
}

/// Tenant entity representing a registered tenant-application user
///
/// Tenants authenticate with email and password, are addressed by their
/// api key from bot integrations, and carry a weekly usage quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier for the tenant
    pub id: Uuid,

    /// Display name of the tenant
    pub name: String,

    /// Email address, unique per tenant, used as the login identifier
    pub email: String,

    /// Contact phone number
    pub phone_number: String,

    /// Api key identifying the tenant to integrations
    pub api_key: String,

    /// Bcrypt hash of the tenant password
    pub password_hash: String,

    /// Role of the tenant user
    pub role: TenantRole,

    /// Weekly usage quota
    pub weekly_quota: i64,

    /// Remaining quota for the current week
    pub balance_quota: i64,

    /// Timestamp when the tenant was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the tenant was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the tenant's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Tenant {
    /// Creates a new Tenant instance
    pub fn new(
        name: String,
        email: String,
        phone_number: String,
        api_key: String,
        password_hash: String,
        weekly_quota: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone_number,
            api_key,
            password_hash,
            role: TenantRole::Admin,
            weekly_quota,
            balance_quota: weekly_quota,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Sets the tenant role
    pub fn with_role(mut self, role: TenantRole) -> Self {
        self.role = role;
        self
    }

    /// Replaces the stored password hash
    pub fn update_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Checks if the tenant has remaining quota
    pub fn has_quota(&self) -> bool {
        self.balance_quota > 0
    }

    /// Consumes one unit of quota
    ///
    /// Returns `false` without changing the balance when the quota is
    /// already exhausted.
    pub fn consume_quota(&mut self) -> bool {
        if self.balance_quota <= 0 {
            return false;
        }
        self.balance_quota -= 1;
        self.updated_at = Utc::now();
        true
    }

    /// Resets the balance quota to the weekly allowance
    pub fn reset_quota(&mut self) {
        self.balance_quota = self.weekly_quota;
        self.updated_at = Utc::now();
    }

    /// Checks if the tenant user is an account admin
    pub fn is_admin(&self) -> bool {
        matches!(self.role, TenantRole::Admin)
    }
}
