//! Rank command implementation.

use crate::cli::RankArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::paths::OutputPlan;
use rarity_domain::{compute_rarity, render_rankings, render_statistics, LinkTemplate};
use rarity_metadata::CollectionDocument;
use std::fs;
use tracing::{debug, info};

/// Execute the rank command.
///
/// Writes the updated metadata, the rankings report and the statistics
/// report, and returns where they went.
pub fn execute_rank(args: RankArgs, config: &Config, formatter: &Formatter) -> Result<OutputPlan> {
    let link = match args.link_template {
        Some(template) => LinkTemplate::new(template)?,
        None => config.link_template()?,
    };
    let reports_dir = args.reports_dir.unwrap_or_else(|| config.output.reports_dir.clone());
    let trait_config = config.trait_config();

    let input = super::input_path(args.input)?;
    let plan = OutputPlan::prepare(&input, args.metadata_dir.as_deref(), &reports_dir)?;

    let mut document = CollectionDocument::load(&input)?;
    let items = document.extract_items();

    println!(
        "{}",
        formatter.info(&format!("Retrieved {} items. Version: new{}", items.len(), plan.version))
    );
    info!(items = items.len(), version = plan.version, input = %input.display(), "Loaded collection");

    let run = compute_rarity(&items, &trait_config)?;

    for item in items.iter().filter(|item| {
        !item.is_featured(&trait_config)
            && item.attributes.iter().all(|attr| attr.scorable_pair(&trait_config).is_none())
    }) {
        debug!(id = %item.id, "Item has no scorable traits, leaving it unranked");
    }

    let updated = document.apply_ranks(&items, &run.ranking.assignment, &trait_config);
    document.save(&plan.metadata)?;
    info!(path = %plan.metadata.display(), updated, "Wrote metadata");

    fs::write(&plan.rankings, render_rankings(&run.ranking, &link))?;
    info!(path = %plan.rankings.display(), "Wrote rankings");

    fs::write(&plan.statistics, render_statistics(&run.statistics))?;
    info!(path = %plan.statistics.display(), "Wrote statistics");

    println!(
        "{}",
        formatter.run_summary(
            &run,
            &trait_config,
            &[plan.metadata.as_path(), plan.rankings.as_path(), plan.statistics.as_path()],
        )
    );

    if !args.quiet {
        println!();
        println!("{}", formatter.format_statistics_table(&run.statistics, None));
    }

    Ok(plan)
}
