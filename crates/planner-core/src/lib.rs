//! # Planner Core
//!
//! Core library for Planner - a paginated personal planner with
//! password-encrypted backups.
//!
//! This crate provides the planner document model and the sealed backup
//! codec, independent of the CLI interface. The planner pages themselves
//! (routing, editing, checklists) are a frontend concern; the core's job
//! is to turn a planner state plus a password into a portable encrypted
//! envelope, and back again.
//!
//! ## Architecture
//!
//! - **state**: the planner document model (free text + checklists)
//! - **crypto**: key derivation and password policy
//! - **backup**: sealed envelope format, seal/unseal operations
//! - **error**: error taxonomy shared across the crate

pub mod backup;
pub mod crypto;
pub mod error;
pub mod state;

pub use backup::codec::{seal, unseal};
pub use backup::envelope::SealedEnvelope;
pub use error::{PlannerError, Result};
pub use state::PlannerState;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
