//! Planner CLI - encrypted backup and restore for planner state files.
//!
//! This is the command-line interface for Planner. It plays the caller's
//! role around the core library: it owns the plaintext state file,
//! collects the password, picks backup file names, and maps core errors
//! to user-facing messages and exit codes.

mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init(args)) => commands::init::run(&cli, args),
        Some(Commands::Backup(args)) => commands::backup::run(&cli, args),
        Some(Commands::Restore(args)) => commands::restore::run(&cli, args),
        Some(Commands::Inspect(args)) => commands::inspect::run(args),
        Some(Commands::Completions(args)) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "planner", &mut std::io::stdout());
            Ok(())
        }
        None => {
            println!("Planner v{}", planner_core::VERSION);
            println!();
            println!("Quickstart:");
            println!("  planner init               Choose where state and backups live");
            println!("  planner backup             Encrypt the planner state to a backup file");
            println!("  planner restore <BACKUP>   Decrypt a backup back into the state file");
            println!();
            println!("Run `planner --help` for usage information.");
            Ok(())
        }
    }
}
