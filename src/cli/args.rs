//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Police CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "police")]
#[command(about = "Flag forbidden patterns in front-end source files")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(long, global = true, default_value = "police.toml")]
    pub config: PathBuf,
}

/// Available police subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect source files and report forbidden patterns
    Check {
        /// Paths to check (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Abort on the first violation, overriding the configuration
        #[arg(long, conflicts_with = "no_strict")]
        strict: bool,

        /// Report every violation without aborting, overriding the configuration
        #[arg(long)]
        no_strict: bool,
    },

    /// List active rules in evaluation order
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write a default police.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
