//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `path` is the explicit `--config` path, if one was given.
pub fn execute_config(args: ConfigArgs, config: &Config, path: Option<&Path>, formatter: &Formatter) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };

    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            if !path.exists() {
                println!("{}", formatter.warning("File not present, showing built-in defaults"));
            }
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            init_config(&path, force)?;
            println!("{}", formatter.success(&format!("Wrote default configuration to {}", path.display())));
        }
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "'{}' already exists, pass --force to overwrite it",
            path.display()
        )));
    }
    Config::default().save(path)
}
