//! Error types for Planner core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer will map these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Core error type for Planner operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Invalid user input (empty password, policy violation)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required cryptographic primitives unavailable in this environment
    #[error("Platform unsupported: {0}")]
    PlatformUnsupported(String),

    /// Sealing could not complete (serialization or cipher error)
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Envelope does not match the expected shape
    #[error("Malformed backup envelope: {0}")]
    MalformedEnvelope(String),

    /// Envelope version tag is not one this codec understands
    #[error("Unsupported backup version: {0}")]
    UnsupportedVersion(String),

    /// Authentication or decoding failed during unsealing.
    ///
    /// Carries no detail: a wrong password and a corrupted/tampered
    /// envelope produce the same signal.
    #[error("Decryption failed: wrong password or corrupted backup")]
    DecryptionFailed,
}
