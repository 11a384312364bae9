use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use planner_core::VERSION;

/// Planner - encrypted backup and restore for your planner
#[derive(Parser)]
#[command(name = "planner")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "PLANNER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where backup files will be written
    #[arg(value_name = "DIR")]
    pub directory: Option<String>,

    /// Path to the plaintext planner state file
    #[arg(long, value_name = "FILE")]
    pub state: Option<String>,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Planner state file to back up (defaults to the configured path)
    #[arg(long, value_name = "FILE")]
    pub state: Option<String>,

    /// Write the backup to this exact path instead of a timestamped
    /// file in the backup directory
    #[arg(long, value_name = "FILE")]
    pub out: Option<String>,
}

/// Arguments for the `restore` command
#[derive(Args)]
pub struct RestoreArgs {
    /// Backup file to restore from
    #[arg(value_name = "BACKUP")]
    pub backup: String,

    /// Write the recovered state to this path (defaults to the
    /// configured state file)
    #[arg(long, value_name = "FILE")]
    pub state: Option<String>,

    /// Print the recovered state to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `inspect` command
#[derive(Args)]
pub struct InspectArgs {
    /// Backup file to inspect
    #[arg(value_name = "BACKUP")]
    pub backup: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose where the planner state and backups live
    Init(InitArgs),

    /// Encrypt the planner state into a fresh backup file
    Backup(BackupArgs),

    /// Decrypt a backup back into the planner state file
    Restore(RestoreArgs),

    /// Show backup metadata without decrypting
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
