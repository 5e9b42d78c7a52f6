//! Interactive input prompt.

use crate::error::{CliError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const INPUT_PROMPT: &str = "Enter path to metadata JSON file: ";

/// Ask the user for the metadata file path.
pub fn prompt_for_input() -> Result<PathBuf> {
    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
    })?;

    match editor.readline(INPUT_PROMPT) {
        Ok(line) => parse_input_line(&line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            Err(CliError::InvalidInput("No input file given".to_string()))
        }
        Err(ReadlineError::Io(e)) => Err(CliError::Io(e)),
        Err(err) => Err(CliError::Io(std::io::Error::other(err.to_string()))),
    }
}

fn parse_input_line(line: &str) -> Result<PathBuf> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("No input file given".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}
