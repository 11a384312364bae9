//! Seal and unseal operations.
//!
//! Sealing derives a fresh key from the password and a random salt, then
//! AES-256-GCM-encrypts the JSON-serialized state under a random nonce.
//! Unsealing re-derives the key from the envelope's stored salt and
//! authenticated-decrypts, failing closed on any mismatch.
//!
//! Both operations are stateless and single-shot: each call generates or
//! consumes its own salt, nonce, and key, so concurrent calls never
//! interfere, and nothing is retained afterwards.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::crypto::key::{derive_key, SALT_LENGTH};
use crate::error::{PlannerError, Result};

use super::envelope::{
    EncryptionHeader, SealedEnvelope, ENCRYPTION_ALGORITHM, ENVELOPE_VERSION, NONCE_LENGTH,
};

/// Fill a fixed-size buffer from the OS entropy source.
fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes).map_err(|e| {
        PlannerError::PlatformUnsupported(format!("secure random source unavailable: {}", e))
    })?;
    Ok(bytes)
}

/// Seal a planner state into a fresh encrypted envelope.
///
/// `state` may be any JSON-serializable value; the codec does not
/// inspect it. The password's only requirement here is non-emptiness;
/// length policy is the caller's job (see
/// [`crate::crypto::validate_password`]).
///
/// Every call draws a new salt and nonce, so sealing the same state
/// twice with the same password yields unrelated envelopes.
///
/// # Errors
///
/// - `PlannerError::InvalidInput` - empty password
/// - `PlannerError::PlatformUnsupported` - OS entropy source failed
/// - `PlannerError::EncryptionFailed` - state serialization or cipher
///   failure; nothing is partially produced
pub fn seal<T: Serialize>(state: &T, password: &str) -> Result<SealedEnvelope> {
    let salt = random_bytes::<SALT_LENGTH>()?;
    let iv = random_bytes::<NONCE_LENGTH>()?;
    let key = derive_key(password, &salt)?;

    let plaintext = Zeroizing::new(serde_json::to_vec(state).map_err(|e| {
        PlannerError::EncryptionFailed(format!("failed to serialize planner state: {}", e))
    })?);

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let data = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext.as_slice())
        .map_err(|_| PlannerError::EncryptionFailed("AES-GCM encryption failed".to_string()))?;

    Ok(SealedEnvelope {
        version: ENVELOPE_VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        encryption: EncryptionHeader {
            algorithm: ENCRYPTION_ALGORITHM.to_string(),
            iv: iv.to_vec(),
            salt: salt.to_vec(),
        },
        data,
    })
}

/// Unseal an envelope back into the original planner state.
///
/// On success the returned value is exactly what was sealed (round-trip
/// fidelity is guaranteed by the GCM tag).
///
/// # Errors
///
/// - `PlannerError::UnsupportedVersion` - version tag unknown; reported
///   before any cryptography runs
/// - `PlannerError::MalformedEnvelope` - structurally invalid input
/// - `PlannerError::InvalidInput` - empty password
/// - `PlannerError::DecryptionFailed` - authentication or JSON decoding
///   failed. Wrong password and corrupted data are deliberately
///   indistinguishable; no partial plaintext is ever returned.
pub fn unseal<T: DeserializeOwned>(envelope: &SealedEnvelope, password: &str) -> Result<T> {
    let (salt, iv) = envelope.validate()?;
    let key = derive_key(password, &salt)?;

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::from_slice(&iv), envelope.data.as_slice())
            .map_err(|_| PlannerError::DecryptionFailed)?,
    );

    // A decode failure after successful authentication should be
    // impossible for envelopes we produced; treat it identically to an
    // authentication failure either way.
    serde_json::from_slice(&plaintext).map_err(|_| PlannerError::DecryptionFailed)
}
