//! Input and path helper functions for the CLI.

use std::io::IsTerminal;

use chrono::{DateTime, Utc};
use dialoguer::Password;
use planner_core::crypto::validate_password;
use zeroize::Zeroizing;

use crate::cli::Cli;
use crate::config::{self, PlannerConfig};
use crate::errors::CliError;

/// Whether stdin is attached to a terminal.
pub fn interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Prompt for the password, or read from the PLANNER_PASSWORD env var.
pub fn prompt_password(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("PLANNER_PASSWORD") {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }
    if !interactive {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set PLANNER_PASSWORD."
        ));
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Prompt with confirmation for creating a backup, or read from the
/// PLANNER_PASSWORD env var. The minimum-length policy is enforced here,
/// before any key derivation happens.
pub fn prompt_backup_password(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("PLANNER_PASSWORD") {
        if !value.trim().is_empty() {
            if let Err(err) = validate_password(&value) {
                CliError::invalid_input(err.to_string()).exit()
            }
            return Ok(Zeroizing::new(value));
        }
    }
    if !interactive {
        return Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set PLANNER_PASSWORD."
        ));
    }
    let password = Password::new()
        .with_prompt("Enter backup password (min 8 characters)")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    if let Err(err) = validate_password(&password) {
        CliError::invalid_input(err.to_string()).exit()
    }
    Ok(Zeroizing::new(password))
}

/// Read the config, or exit with a pointer to `planner init`.
pub fn load_config_or_exit(cli: &Cli) -> anyhow::Result<PlannerConfig> {
    let path = config::resolve_config_path(cli)?;
    if !path.exists() {
        CliError::not_found(
            format!("No planner config found at {}", path.display()),
            "Run `planner init` first, or pass explicit paths.",
        )
        .exit()
    }
    config::read_config(&path)
}

/// Timestamped backup file name, e.g.
/// `planner-backup-2026-01-05T09-30-00.json`. Colons and fractional
/// seconds are dropped so the name is valid on every filesystem.
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("planner-backup-{}.json", now.format("%Y-%m-%dT%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_backup_file_name_format() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(
            backup_file_name(instant),
            "planner-backup-2026-01-05T09-30-00.json"
        );
    }
}
