//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translation keys from source files into the inventory
//! - `init`: Write a default `.transkitrc.json`
//! - `serve`: Start the MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by project-scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory to scan (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Inventory file to merge keys into (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report what would be added without writing the inventory
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys from source files into the key inventory
    Extract(ExtractCommand),
    /// Initialize a new .transkitrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
