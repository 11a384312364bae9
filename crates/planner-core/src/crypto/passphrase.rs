//! Password validation.
//!
//! Enforces minimum security requirements for backup passwords. The
//! sealing codec itself only rejects empty passwords; the length policy
//! is applied by callers (the CLI) before any key derivation happens.

use crate::error::{PlannerError, Result};

/// Minimum password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a backup password meets minimum security requirements.
///
/// # Requirements
///
/// - At least 8 characters long
/// - Not empty or only whitespace
///
/// # Returns
///
/// Returns `Ok(())` if valid, or `PlannerError::InvalidInput` with an
/// explanation.
pub fn validate_password(password: &str) -> Result<()> {
    // Check empty/whitespace
    if password.trim().is_empty() {
        return Err(PlannerError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    // Check minimum length
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(PlannerError::InvalidInput(format!(
            "Password must be at least {} characters (got {})",
            MIN_PASSWORD_LENGTH,
            password.len()
        )));
    }

    Ok(())
}
