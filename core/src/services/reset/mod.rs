//! Password reset service module
//!
//! Handles the email-based password recovery flow: reset codes are
//! generated here and delivered through the email collaborator; code
//! verification and the password update close the loop.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::{PasswordResetConfig, PasswordResetService};
pub use traits::EmailServiceTrait;
