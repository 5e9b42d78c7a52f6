//! Rarity CLI library.
//!
//! This library provides the command-line front end for the rarity ranker:
//! configuration, input prompting, versioned output paths, command execution
//! and console formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod prompt;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
