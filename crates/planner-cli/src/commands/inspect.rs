//! `planner inspect` - show backup metadata without decrypting.
//!
//! Everything printed here comes from the envelope header; no password
//! is requested and no key derivation runs.

use std::path::PathBuf;

use planner_core::SealedEnvelope;

use crate::cli::InspectArgs;
use crate::errors::CliError;

pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let backup_path = PathBuf::from(&args.backup);
    let backup_text = match std::fs::read_to_string(&backup_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CliError::not_found(
            format!("No backup found at {}", backup_path.display()),
            "Check the path and try again.",
        )
        .exit(),
        Err(e) => {
            return Err(anyhow::anyhow!(
                "Failed to read backup {}: {}",
                backup_path.display(),
                e
            ))
        }
    };

    let envelope = SealedEnvelope::from_json(&backup_text)?;
    envelope.validate()?;

    if args.json {
        let value = serde_json::json!({
            "version": envelope.version,
            "timestamp": envelope.timestamp,
            "algorithm": envelope.encryption.algorithm,
            "salt_bytes": envelope.encryption.salt.len(),
            "iv_bytes": envelope.encryption.iv.len(),
            "payload_bytes": envelope.data.len(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Version: {}", envelope.version);
        println!("Created: {}", envelope.timestamp);
        println!("Algorithm: {}", envelope.encryption.algorithm);
        println!(
            "Payload: {} bytes (includes the 16-byte authentication tag)",
            envelope.data.len()
        );
    }
    Ok(())
}
