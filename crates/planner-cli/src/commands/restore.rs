//! `planner restore` - decrypt a backup back into the planner state.

use std::path::PathBuf;

use planner_core::backup::unseal;
use planner_core::{PlannerError, PlannerState, SealedEnvelope};

use crate::cli::{Cli, RestoreArgs};
use crate::errors::CliError;
use crate::helpers::{self, load_config_or_exit, prompt_password};

pub fn run(cli: &Cli, args: &RestoreArgs) -> anyhow::Result<()> {
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

    let state = unseal_with_retry(&envelope)?;

    if args.stdout {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    let state_path = match &args.state {
        Some(path) => PathBuf::from(path),
        None => {
            let config = load_config_or_exit(cli)?;
            PathBuf::from(&config.planner.state_path)
        }
    };
    if let Some(parent) = state_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create state directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }
    std::fs::write(&state_path, serde_json::to_string_pretty(&state)?).map_err(|e| {
        anyhow::anyhow!(
            "Failed to write planner state {}: {}",
            state_path.display(),
            e
        )
    })?;

    if !cli.quiet {
        println!("Restored planner state to {}", state_path.display());
    }
    Ok(())
}

/// Unseal with password retry when interactive.
///
/// Wrong password and corrupted data are the same error from the core,
/// so the retry message stays honest about both possibilities.
fn unseal_with_retry(envelope: &SealedEnvelope) -> anyhow::Result<PlannerState> {
    let interactive = helpers::interactive();
    let from_env = std::env::var("PLANNER_PASSWORD")
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    let max_attempts: u32 = if interactive && !from_env { 3 } else { 1 };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let password = prompt_password(interactive)?;
        match unseal(envelope, password.as_str()) {
            Ok(state) => return Ok(state),
            Err(PlannerError::DecryptionFailed) => {
                let remaining = max_attempts.saturating_sub(attempts);
                if remaining == 0 {
                    CliError::auth_failed_with_hint(
                        "Failed to decrypt backup.",
                        "Hint: A wrong password and a corrupted file are indistinguishable.\n      If the password is correct, the file may be damaged.",
                    )
                    .exit()
                }
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
                continue;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
