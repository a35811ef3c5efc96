//! Perenos CLI library
//!
//! This library provides the command-line interface for reflowing Russian
//! text to a fixed width with dictionary-free hyphenation.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Reflow Russian text to a fixed width with dictionary-free hyphenation
#[derive(Debug, Parser)]
#[command(name = "perenos", version)]
#[command(about = "Reflow Russian text to a fixed width with dictionary-free hyphenation", long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: commands::Commands,
}
