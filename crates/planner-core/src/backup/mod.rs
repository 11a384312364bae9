//! Sealed backups: password-encrypted export and import of planner state.
//!
//! A backup is a self-contained JSON envelope carrying everything needed
//! to attempt decryption except the password itself: format version,
//! creation timestamp, cipher identifier, per-backup salt and nonce, and
//! the authenticated ciphertext.
//!
//! - [`envelope`] - the on-disk envelope format and its validation
//! - [`codec`] - the seal/unseal operations

pub mod codec;
pub mod envelope;

pub use codec::{seal, unseal};
pub use envelope::SealedEnvelope;
