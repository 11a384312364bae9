//! `planner backup` - seal the planner state into a fresh backup file.

use std::path::PathBuf;

use planner_core::backup::seal;
use planner_core::PlannerState;

use crate::cli::{BackupArgs, Cli};
use crate::errors::CliError;
use crate::helpers::{self, backup_file_name, load_config_or_exit, prompt_backup_password};

pub fn run(cli: &Cli, args: &BackupArgs) -> anyhow::Result<()> {
    // Explicit --state and --out together skip the config entirely, so
    // one-off exports work without `planner init`.
    let (state_path, out_path) = match (&args.state, &args.out) {
        (Some(state), Some(out)) => (PathBuf::from(state), PathBuf::from(out)),
        _ => {
            let config = load_config_or_exit(cli)?;
            let state = args
                .state
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(&config.planner.state_path));
            let out = args.out.as_ref().map(PathBuf::from).unwrap_or_else(|| {
                PathBuf::from(&config.backup.directory)
                    .join(backup_file_name(chrono::Utc::now()))
            });
            (state, out)
        }
    };

    let state_text = match std::fs::read_to_string(&state_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CliError::not_found(
            format!("No planner state found at {}", state_path.display()),
            "Run `planner init` first, or pass --state.",
        )
        .exit(),
        Err(e) => {
            return Err(anyhow::anyhow!(
                "Failed to read planner state {}: {}",
                state_path.display(),
                e
            ))
        }
    };
    let state: PlannerState = serde_json::from_str(&state_text).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse planner state {}: {}",
            state_path.display(),
            e
        )
    })?;

    let password = prompt_backup_password(helpers::interactive())?;
    let envelope = seal(&state, password.as_str())?;

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create backup directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }
    std::fs::write(&out_path, envelope.to_json()?)
        .map_err(|e| anyhow::anyhow!("Failed to write backup {}: {}", out_path.display(), e))?;

    if !cli.quiet {
        println!("Backup saved to {}", out_path.display());
    }
    Ok(())
}
