//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Translint
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run consistency rules (missing keys, orphan keys, placeholders, markup)
//! - `status`: Print the per-locale workflow summary table
//! - `export`: Write translations to an escaped CSV file
//! - `init`: Initialize translint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Status(cmd)) => cmd.args.common.verbose,
            Some(Command::Export(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locales directory path (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Source locale code (overrides config file)
    #[arg(long)]
    pub source_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct StatusArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub args: StatusArgs,
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Export a single target locale (default: all locales)
    #[arg(long)]
    pub locale: Option<String>,

    /// Directory to write the CSV file into (default: current directory)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub args: ExportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check locale files for consistency issues (missing keys, orphan keys, placeholders, markup)
    Check(CheckCommand),
    /// Show per-locale translation progress
    Status(StatusCommand),
    /// Export translations to a CSV file
    Export(ExportCommand),
    /// Initialize a new .translintrc.json configuration file
    Init,
}
