//! End-to-end rarity computation over an in-memory collection

use crate::config::TraitConfig;
use crate::error::RarityError;
use crate::frequency::TraitFrequencyTable;
use crate::item::Item;
use crate::ranking::{rank_items, Ranking};
use crate::scoring::score_items;
use crate::statistics::TraitStatistics;

/// Everything a rarity run produces
#[derive(Debug, Clone)]
pub struct RarityRun<'a> {
    /// Trait frequencies across the collection
    pub table: TraitFrequencyTable,
    /// Ranked rows and the write-back lookup
    pub ranking: Ranking<'a>,
    /// Featured and regular trait statistics
    pub statistics: TraitStatistics,
}

impl RarityRun<'_> {
    /// Items that received no rank (non-featured, nothing scorable)
    pub fn dropped_count(&self) -> usize {
        self.ranking.total_items - self.ranking.entries.len()
    }
}

/// Aggregate, score and rank a collection
///
/// Fails only on an empty collection.
pub fn compute_rarity<'a>(items: &'a [Item], config: &TraitConfig) -> Result<RarityRun<'a>, RarityError> {
    if items.is_empty() {
        return Err(RarityError::EmptyCollection);
    }

    let table = TraitFrequencyTable::aggregate(items, config);
    let scored = score_items(items, &table, config);
    let ranking = rank_items(scored, items, config);
    let statistics = TraitStatistics::collect(items, &table, config);

    Ok(RarityRun {
        table,
        ranking,
        statistics,
    })
}
