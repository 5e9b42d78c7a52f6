//! Command implementations.

pub mod config;
pub mod rank;
pub mod stats;

pub use self::config::execute_config;
pub use self::rank::execute_rank;
pub use self::stats::execute_stats;

use crate::error::Result;
use crate::paths::resolve_input;
use crate::prompt::prompt_for_input;
use std::path::PathBuf;

/// Resolve the input argument, prompting when it was omitted.
fn input_path(input: Option<PathBuf>) -> Result<PathBuf> {
    let raw = match input {
        Some(path) => path,
        None => prompt_for_input()?,
    };
    resolve_input(&raw)
}
