//! CLI argument parsing via clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use themecheck::build_info;

/// Validate theme definitions and render their SVG previews.
#[derive(Debug, Parser)]
#[command(name = "themecheck", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file (default: ./themecheck.toml or ~/.config/themecheck/themecheck.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override the directory holding one folder per theme.
    #[arg(long = "themes-dir", global = true, value_name = "DIR")]
    pub themes_dir: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check every theme folder and exit nonzero on any error (default).
    Validate,
    /// Write a preview image next to every valid theme.
    Preview,
}

impl Args {
    /// Selected subcommand, defaulting to `validate`.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Validate)
    }
}
