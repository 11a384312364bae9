use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub planner: PlannerSection,
    pub backup: BackupSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Path to the plaintext planner state file.
    pub state_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BackupSection {
    /// Directory where timestamped backup files are written.
    pub directory: String,
}

impl PlannerConfig {
    pub fn new(state_path: PathBuf, backup_directory: PathBuf) -> Self {
        Self {
            planner: PlannerSection {
                state_path: state_path.to_string_lossy().to_string(),
            },
            backup: BackupSection {
                directory: backup_directory.to_string_lossy().to_string(),
            },
        }
    }
}

pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.config {
        return Ok(PathBuf::from(path));
    }
    default_config_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_state_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("state.json"))
}

pub fn default_backup_dir() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("backups"))
}

pub fn read_config(path: &Path) -> anyhow::Result<PlannerConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &PlannerConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("planner"));
        }
    }
    Ok(home_dir()?.join(".config").join("planner"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("planner"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("planner"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
