//! Core domain entities.

pub mod reset_code;
pub mod tenant;
pub mod token;

pub use reset_code::PasswordResetCode;
pub use tenant::{Tenant, TenantRole};
pub use token::{Claims, RefreshTokenRecord, TokenPair};
