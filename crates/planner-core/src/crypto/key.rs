//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module derives encryption keys from passwords using PBKDF2 with
//! a high iteration count, making brute-force attacks on exported
//! backups computationally expensive.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{PlannerError, Result};

/// PBKDF2 iteration count.
///
/// This value is a fixed parameter of the backup format: envelopes do not
/// record it, so changing it would silently break decryption of existing
/// backups. Any change must come with a new envelope version.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the per-backup random salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
const KEY_LENGTH: usize = 32;

/// A cryptographic key derived from a password.
///
/// This type ensures that key material is securely zeroized from memory
/// when dropped, reducing the window of exposure. It is single-purpose:
/// the raw bytes are only reachable through [`DerivedKey::as_bytes`] for
/// immediate cipher use, and the type deliberately implements neither
/// `Clone` nor any serialization.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate
    /// encryption or decryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a password using PBKDF2-HMAC-SHA256.
///
/// # Arguments
///
/// * `password` - The password to derive from
/// * `salt` - Random salt (unique per backup)
///
/// # Security
///
/// - Same password + salt always produces the same key (deterministic)
/// - A different salt produces an unrelated key, so two backups of the
///   same password are unlinkable (the salt travels with the envelope)
/// - 100,000 iterations make each guess of an offline attacker cost as
///   much as a legitimate unlock
pub fn derive_key(password: &str, salt: &[u8; SALT_LENGTH]) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(PlannerError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key_bytes);

    Ok(DerivedKey { key: key_bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let password = "test-password";
        let salt = b"unique-salt-0123";

        let key1 = derive_key(password, salt).unwrap();
        let key2 = derive_key(password, salt).unwrap();

        // Same password + salt should produce identical keys
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let password = "test-password";

        let key1 = derive_key(password, b"salt-aaaaaaaaaaa").unwrap();
        let key2 = derive_key(password, b"salt-bbbbbbbbbbb").unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = b"fixed-salt-01234";

        let key1 = derive_key("password-one", salt).unwrap();
        let key2 = derive_key("password-two", salt).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = derive_key("", b"salt-0123456789a");
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_key_length() {
        let key = derive_key("test-password", b"salt-0123456789a").unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LENGTH);
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-password", b"salt-0123456789a").unwrap();

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        // Should NOT contain actual key bytes
        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }

    /// Published PBKDF2-HMAC-SHA256 test vector (password="password",
    /// salt="salt", c=1). Guards against the underlying crate changing
    /// behavior across upgrades.
    #[test]
    fn test_pbkdf2_known_vector() {
        let mut out = [0u8; 32];
        pbkdf2_hmac::<Sha256>(b"password", b"salt", 1, &mut out);
        assert_eq!(
            hex::encode(out),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }
}
