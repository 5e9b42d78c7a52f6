//! Trait frequency aggregation
//!
//! Counts how many times each `(trait_type, value)` pair occurs across a
//! collection. The table is the only input the scorer needs besides the items.

use crate::config::TraitConfig;
use crate::item::{Item, TraitValue};
use std::collections::HashMap;

/// Occurrence count of one trait pair
#[derive(Debug, Clone, PartialEq)]
pub struct TraitFrequency {
    /// Trait type
    pub trait_type: String,
    /// Trait value
    pub value: TraitValue,
    /// Number of occurrences, always at least 1
    pub count: usize,
}

/// Mapping from `(trait_type, value)` to occurrence count
///
/// Entries keep first-seen order so that later stable sorts reproduce the
/// order of the source collection.
#[derive(Debug, Clone, Default)]
pub struct TraitFrequencyTable {
    entries: Vec<TraitFrequency>,
    index: HashMap<String, HashMap<TraitValue, usize>>,
    total_items: usize,
}

impl TraitFrequencyTable {
    /// Count every scorable attribute of every item
    pub fn aggregate(items: &[Item], config: &TraitConfig) -> Self {
        let mut table = Self {
            total_items: items.len(),
            ..Self::default()
        };

        for item in items {
            for attr in &item.attributes {
                if let Some((trait_type, value)) = attr.scorable_pair(config) {
                    table.record(trait_type, value);
                }
            }
        }

        table
    }

    fn record(&mut self, trait_type: &str, value: &TraitValue) {
        let by_value = self.index.entry(trait_type.to_string()).or_default();
        match by_value.get(value) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                by_value.insert(value.clone(), self.entries.len());
                self.entries.push(TraitFrequency {
                    trait_type: trait_type.to_string(),
                    value: value.clone(),
                    count: 1,
                });
            }
        }
    }

    /// Collection size N, including items with no scorable traits
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Occurrence count of a pair, `None` if it was never observed
    pub fn frequency(&self, trait_type: &str, value: &TraitValue) -> Option<usize> {
        let pos = self.index.get(trait_type)?.get(value)?;
        Some(self.entries[*pos].count)
    }

    /// Rarity score `N / frequency`, `None` if the pair was never observed
    pub fn score(&self, trait_type: &str, value: &TraitValue) -> Option<f64> {
        self.frequency(trait_type, value)
            .map(|count| self.total_items as f64 / count as f64)
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[TraitFrequency] {
        &self.entries
    }

    /// Number of distinct trait pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pair was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TraitFrequency {
    /// Rarity score of this pair in a collection of `total_items`
    pub fn score(&self, total_items: usize) -> f64 {
        total_items as f64 / self.count as f64
    }
}
