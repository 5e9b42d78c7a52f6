//! Stats command implementation.

use crate::cli::{StatsArgs, StatsFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rarity_domain::{compute_rarity, TraitStatistics};
use rarity_metadata::CollectionDocument;
use tracing::info;

/// Execute the stats command.
pub fn execute_stats(args: StatsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = super::input_path(args.input)?;
    let document = CollectionDocument::load(&input)?;
    let items = document.extract_items();
    info!(items = items.len(), input = %input.display(), "Loaded collection");

    let run = compute_rarity(&items, &config.trait_config())?;
    println!("{}", render(&run.statistics, args.format, args.limit, formatter)?);

    Ok(())
}

fn render(stats: &TraitStatistics, format: StatsFormat, limit: Option<usize>, formatter: &Formatter) -> Result<String> {
    match format {
        StatsFormat::Table => Ok(formatter.format_statistics_table(stats, limit)),
        StatsFormat::Json => formatter.format_statistics_json(stats, limit),
    }
}
