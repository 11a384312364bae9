//! `planner init` - choose where the state and backups live.

use std::path::PathBuf;

use planner_core::PlannerState;

use crate::cli::{Cli, InitArgs};
use crate::config::{self, PlannerConfig};

pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = config::resolve_config_path(cli)?;

    let backup_dir = match &args.directory {
        Some(dir) => PathBuf::from(dir),
        None => config::default_backup_dir()?,
    };
    let state_path = match &args.state {
        Some(path) => PathBuf::from(path),
        None => config::default_state_path()?,
    };

    std::fs::create_dir_all(&backup_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create backup directory {}: {}",
            backup_dir.display(),
            e
        )
    })?;
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

    // Seed an empty planner; an existing state file is never touched.
    if !state_path.exists() {
        let empty = serde_json::to_string_pretty(&PlannerState::default())?;
        std::fs::write(&state_path, empty).map_err(|e| {
            anyhow::anyhow!(
                "Failed to write state file {}: {}",
                state_path.display(),
                e
            )
        })?;
    }

    let planner_config = PlannerConfig::new(state_path.clone(), backup_dir.clone());
    config::write_config(&config_path, &planner_config)?;

    if !cli.quiet {
        println!("Initialized planner config at {}", config_path.display());
        println!("State file: {}", state_path.display());
        println!("Backup directory: {}", backup_dir.display());
    }
    Ok(())
}
