//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "haven-config",
    about = "Validate operator configuration and emit Haven relay artifacts",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a submission and write the relay artifacts
    Apply {
        /// Submission document (JSON, YAML, or TOML)
        #[arg(short, long)]
        input: PathBuf,
        /// Artifact root the relay reads from
        #[arg(long, default_value = "/data")]
        root: PathBuf,
    },
    /// Print status properties derived from the persisted snapshot
    Properties {
        /// Artifact root holding the snapshot
        #[arg(long, default_value = "/data")]
        root: PathBuf,
    },
    /// Probe the relay endpoint once
    Health {
        /// Endpoint to probe
        #[arg(long, default_value = haven_status::DEFAULT_HEALTH_URL)]
        url: String,
    },
    /// Print the built-in default relay list
    Defaults,
    /// Print the version-migration hooks
    Migrations,
}
