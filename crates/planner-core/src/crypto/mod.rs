//! Cryptographic operations for Planner backups.
//!
//! This module provides key derivation and password policy services using
//! well-audited libraries:
//! - **AES-256-GCM**: Authenticated encryption (see [`crate::backup::codec`])
//! - **PBKDF2-HMAC-SHA256**: Salted, deliberately slow key derivation
//!
//! ## Security Model
//!
//! - Password-based encryption; one fresh key per backup
//! - PBKDF2 with a fixed 100,000-iteration work factor to slow offline
//!   brute-force of the password
//! - Key material zeroized from memory on drop
//! - No passwords or derived keys stored or logged
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of an exported backup file
//! - Offline brute-force attacks on the password
//!
//! We do NOT defend against:
//! - A compromised password
//! - Code execution in the environment holding the unsealed planner

pub mod key;
pub mod passphrase;

pub use key::{derive_key, DerivedKey, PBKDF2_ITERATIONS, SALT_LENGTH};
pub use passphrase::validate_password;
