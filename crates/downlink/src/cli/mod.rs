//! CLI definition and command handling

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{PrCommand, SyncCommand, ValidateCommand};

/// Downlink - sync pushed commits with the issue tracker
#[derive(Debug, Parser)]
#[command(name = "downlink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Post per-issue summary comments for the pushed commit range
    Sync(SyncCommand),

    /// Announce an opened pull request on the issue its branch references
    Pr(PrCommand),

    /// Check that every pushed commit subject matches the tag grammar
    Validate(ValidateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Sync(ref cmd) => cmd.execute(&self),
            Commands::Pr(ref cmd) => cmd.execute(&self),
            Commands::Validate(ref cmd) => cmd.execute(&self),
        }
    }
}
