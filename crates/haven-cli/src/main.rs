//! Haven configuration CLI
//!
//! Operator-facing front-end for the configuration engine: validates a
//! submission, writes the relay artifacts, and exposes the read-side
//! status commands.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Haven relay configuration", "haven-config".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "haven-config --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply { input, root } => commands::run_apply(&input, &root),
        Commands::Properties { root } => commands::run_properties(&root),
        Commands::Health { url } => commands::run_health(&url),
        Commands::Defaults => commands::run_defaults(),
        Commands::Migrations => commands::run_migrations(),
    }
}
