//! Trait statistics for the statistics report and console output

use crate::config::TraitConfig;
use crate::frequency::{TraitFrequency, TraitFrequencyTable};
use crate::item::{Item, TraitValue};

/// Occurrence count of a featured trait value
///
/// Featured traits never feed scoring; they are counted for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedTraitCount {
    /// Featured trait type
    pub trait_type: String,
    /// Featured value, `None` when the attribute had no value
    pub value: Option<TraitValue>,
    /// Number of occurrences
    pub count: usize,
}

/// Featured and regular trait counts, each sorted rarest first
#[derive(Debug, Clone)]
pub struct TraitStatistics {
    /// Featured trait values
    pub featured: Vec<FeaturedTraitCount>,
    /// Regular trait pairs used in scoring
    pub regular: Vec<TraitFrequency>,
    /// Collection size N
    pub total_items: usize,
}

impl TraitStatistics {
    /// Collect statistics for a collection
    pub fn collect(items: &[Item], table: &TraitFrequencyTable, config: &TraitConfig) -> Self {
        let mut featured: Vec<FeaturedTraitCount> = Vec::new();
        for attr in items.iter().flat_map(|item| item.attributes.iter()) {
            let Some(trait_type) = attr.trait_type.as_deref() else {
                continue;
            };
            if !config.reserved.is_featured(trait_type) {
                continue;
            }
            match featured.iter_mut().find(|f| f.value == attr.value) {
                Some(existing) => existing.count += 1,
                None => featured.push(FeaturedTraitCount {
                    trait_type: trait_type.to_string(),
                    value: attr.value.clone(),
                    count: 1,
                }),
            }
        }

        let mut regular = table.entries().to_vec();

        // Highest score first == lowest count first; stable keeps first-seen order
        featured.sort_by_key(|f| f.count);
        regular.sort_by_key(|r| r.count);

        Self {
            featured,
            regular,
            total_items: table.total_items(),
        }
    }

    /// Whether any featured trait was seen
    pub fn has_featured(&self) -> bool {
        !self.featured.is_empty()
    }

    /// Rarity score of a regular entry
    pub fn score_of(&self, entry: &TraitFrequency) -> f64 {
        entry.score(self.total_items)
    }
}
