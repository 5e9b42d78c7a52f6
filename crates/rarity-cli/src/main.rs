//! Rarity CLI - rank NFT collection items by trait rarity.

use clap::Parser;
use rarity_cli::cli::{ConfigAction, ConfigArgs, RankArgs};
use rarity_cli::commands;
use rarity_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> rarity_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // `config init` must work before a config file exists
    let config = match &cli.command {
        Some(Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        })) => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        None => {
            commands::execute_rank(RankArgs::default(), &config, &formatter)?;
        }
        Some(Command::Rank(args)) => {
            commands::execute_rank(args, &config, &formatter)?;
        }
        Some(Command::Stats(args)) => {
            commands::execute_stats(args, &config, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
    }

    Ok(())
}
