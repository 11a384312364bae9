//! Sealed envelope wire format: structure, serialization, validation.
//!
//! # Wire shape
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "timestamp": "2026-01-05T09:30:00.000Z",
//!   "encryption": {
//!     "algorithm": "AES-GCM",
//!     "iv": [12 integers],
//!     "salt": [16 integers]
//!   },
//!   "data": [N integers]
//! }
//! ```
//!
//! Byte sequences are encoded as JSON arrays of integers, not base64.
//! This matches the format of previously exported backups and must be
//! preserved for them to remain importable.

use serde::{Deserialize, Serialize};

use crate::crypto::key::SALT_LENGTH;
use crate::error::{PlannerError, Result};

/// Current envelope format version.
pub const ENVELOPE_VERSION: &str = "1.0";

/// Cipher identifier recorded in every envelope.
pub const ENCRYPTION_ALGORITHM: &str = "AES-GCM";

/// Length of the AES-GCM nonce in bytes (96 bits).
pub const NONCE_LENGTH: usize = 12;

/// Cipher parameters stored alongside the ciphertext.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncryptionHeader {
    /// Cipher identifier (always `"AES-GCM"` for version 1.0).
    pub algorithm: String,
    /// Per-backup random nonce.
    pub iv: Vec<u8>,
    /// Per-backup random key-derivation salt.
    pub salt: Vec<u8>,
}

/// A sealed planner backup: the unit written to and read from disk.
///
/// Self-contained by design: unsealing requires only this envelope and
/// the password. Envelopes are created fresh on every backup and never
/// mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedEnvelope {
    /// Envelope format version tag.
    pub version: String,
    /// Creation time (ISO-8601). Informational only; not part of any
    /// cryptographic computation.
    pub timestamp: String,
    /// Cipher parameters.
    pub encryption: EncryptionHeader,
    /// Authenticated ciphertext (ciphertext with the 16-byte GCM tag
    /// appended).
    pub data: Vec<u8>,
}

impl SealedEnvelope {
    /// Parse an envelope from its JSON text form.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::MalformedEnvelope` if the text is not
    /// valid JSON of the expected shape (including byte values outside
    /// 0-255).
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| {
            PlannerError::MalformedEnvelope(format!("not a valid backup envelope: {}", e))
        })
    }

    /// Serialize the envelope to pretty-printed JSON, the form written
    /// to backup files.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlannerError::EncryptionFailed(format!("failed to serialize envelope: {}", e))
        })
    }

    /// Validate the envelope and extract its fixed-size salt and nonce.
    ///
    /// # Validation order
    ///
    /// 1. Version tag must be a supported value (`UnsupportedVersion`
    ///    otherwise, before anything else is inspected).
    /// 2. Algorithm identifier must be `"AES-GCM"` (`MalformedEnvelope`).
    /// 3. Salt must be exactly 16 bytes, nonce exactly 12
    ///    (`MalformedEnvelope`).
    ///
    /// The ciphertext length is deliberately not checked here: a
    /// truncated payload fails authentication during unsealing, which
    /// keeps corruption indistinguishable from a wrong password.
    pub fn validate(&self) -> Result<([u8; SALT_LENGTH], [u8; NONCE_LENGTH])> {
        if self.version != ENVELOPE_VERSION {
            return Err(PlannerError::UnsupportedVersion(format!(
                "expected version {}, got {}",
                ENVELOPE_VERSION, self.version
            )));
        }

        if self.encryption.algorithm != ENCRYPTION_ALGORITHM {
            return Err(PlannerError::MalformedEnvelope(format!(
                "unknown encryption algorithm: {}",
                self.encryption.algorithm
            )));
        }

        let salt: [u8; SALT_LENGTH] =
            self.encryption.salt.as_slice().try_into().map_err(|_| {
                PlannerError::MalformedEnvelope(format!(
                    "salt must be {} bytes, got {}",
                    SALT_LENGTH,
                    self.encryption.salt.len()
                ))
            })?;

        let iv: [u8; NONCE_LENGTH] = self.encryption.iv.as_slice().try_into().map_err(|_| {
            PlannerError::MalformedEnvelope(format!(
                "iv must be {} bytes, got {}",
                NONCE_LENGTH,
                self.encryption.iv.len()
            ))
        })?;

        Ok((salt, iv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_envelope() -> SealedEnvelope {
        SealedEnvelope {
            version: ENVELOPE_VERSION.to_string(),
            timestamp: "2026-01-05T09:30:00.000Z".to_string(),
            encryption: EncryptionHeader {
                algorithm: ENCRYPTION_ALGORITHM.to_string(),
                iv: vec![0xBB; NONCE_LENGTH],
                salt: vec![0xAA; SALT_LENGTH],
            },
            data: vec![0xCC; 48],
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let (salt, iv) = sample_envelope().validate().expect("validate");
        assert_eq!(salt, [0xAA; SALT_LENGTH]);
        assert_eq!(iv, [0xBB; NONCE_LENGTH]);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut envelope = sample_envelope();
        envelope.version = "99.0".to_string();
        assert!(matches!(
            envelope.validate(),
            Err(PlannerError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_version_checked_before_structure() {
        // A future-version envelope with a short salt must report the
        // version problem, not the structural one.
        let mut envelope = sample_envelope();
        envelope.version = "2.0".to_string();
        envelope.encryption.salt = vec![0xAA; 4];
        assert!(matches!(
            envelope.validate(),
            Err(PlannerError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let mut envelope = sample_envelope();
        envelope.encryption.algorithm = "ROT13".to_string();
        assert!(matches!(
            envelope.validate(),
            Err(PlannerError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_short_salt_rejected() {
        let mut envelope = sample_envelope();
        envelope.encryption.salt.truncate(15);
        let err = envelope.validate().unwrap_err();
        assert!(matches!(err, PlannerError::MalformedEnvelope(_)));
        assert!(err.to_string().contains("salt"));
    }

    #[test]
    fn test_long_iv_rejected() {
        let mut envelope = sample_envelope();
        envelope.encryption.iv.push(0xBB);
        assert!(matches!(
            envelope.validate(),
            Err(PlannerError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_json_wire_shape() {
        let text = sample_envelope().to_json().expect("to_json");
        let value: serde_json::Value = serde_json::from_str(&text).expect("parse");

        assert_eq!(value["version"], serde_json::json!("1.0"));
        assert_eq!(value["encryption"]["algorithm"], serde_json::json!("AES-GCM"));

        // Byte sequences are arrays of integers, not base64 strings.
        let iv = value["encryption"]["iv"].as_array().expect("iv array");
        assert_eq!(iv.len(), NONCE_LENGTH);
        assert!(iv.iter().all(|v| v.is_u64() && v.as_u64().unwrap() <= 255));
        let salt = value["encryption"]["salt"].as_array().expect("salt array");
        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(value["data"].is_array());
    }

    #[test]
    fn test_from_json_round_trip() {
        let envelope = sample_envelope();
        let text = envelope.to_json().expect("to_json");
        let parsed = SealedEnvelope::from_json(&text).expect("from_json");
        assert_eq!(parsed.version, envelope.version);
        assert_eq!(parsed.encryption.salt, envelope.encryption.salt);
        assert_eq!(parsed.encryption.iv, envelope.encryption.iv);
        assert_eq!(parsed.data, envelope.data);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            SealedEnvelope::from_json("not json"),
            Err(PlannerError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            SealedEnvelope::from_json(r#"{"version": "1.0"}"#),
            Err(PlannerError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_out_of_range_bytes() {
        let text = r#"{
            "version": "1.0",
            "timestamp": "2026-01-05T09:30:00.000Z",
            "encryption": {"algorithm": "AES-GCM", "iv": [300], "salt": []},
            "data": []
        }"#;
        assert!(matches!(
            SealedEnvelope::from_json(text),
            Err(PlannerError::MalformedEnvelope(_))
        ));
    }
}
