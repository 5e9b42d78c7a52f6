//! Rarity scoring
//!
//! Turns frequency counts into per-item totals and picks each item's rarest
//! trait. Featured items with nothing to score get a sentinel total so they
//! sort ahead of every scored item.

use crate::config::TraitConfig;
use crate::frequency::TraitFrequencyTable;
use crate::item::{Item, TraitValue};

/// Total assigned to featured items with no scorable traits
///
/// Sorts above any finite score.
pub const FEATURED_SENTINEL_SCORE: f64 = f64::INFINITY;

/// The highest-scoring trait of an item
#[derive(Debug, Clone, PartialEq)]
pub struct RarestTrait {
    /// Trait type
    pub trait_type: String,
    /// Trait value; absent only for a featured marker without a value
    pub value: Option<TraitValue>,
    /// Rarity score of the trait
    pub score: f64,
}

/// An item that made it through scoring
#[derive(Debug, Clone)]
pub struct ScoredItem<'a> {
    /// The scored item
    pub item: &'a Item,
    /// Sum of the item's trait scores, or the featured sentinel
    pub total_score: f64,
    /// The item's rarest trait
    pub rarest_trait: RarestTrait,
}

/// Score every item against `table`
///
/// Output keeps input order. Non-featured items without any scorable trait
/// are left out.
pub fn score_items<'a>(
    items: &'a [Item],
    table: &TraitFrequencyTable,
    config: &TraitConfig,
) -> Vec<ScoredItem<'a>> {
    items
        .iter()
        .filter_map(|item| score_item(item, table, config))
        .collect()
}

/// Score a single item
pub fn score_item<'a>(
    item: &'a Item,
    table: &TraitFrequencyTable,
    config: &TraitConfig,
) -> Option<ScoredItem<'a>> {
    let mut total_score = 0.0;
    let mut rarest: Option<RarestTrait> = None;

    for attr in &item.attributes {
        let Some((trait_type, value)) = attr.scorable_pair(config) else {
            continue;
        };
        let Some(score) = table.score(trait_type, value) else {
            unreachable!("trait pair {trait_type:?} = {value} was scored but never aggregated");
        };

        total_score += score;

        // Strictly greater: the first maximal trait wins ties
        if rarest.as_ref().map_or(true, |r| score > r.score) {
            rarest = Some(RarestTrait {
                trait_type: trait_type.to_string(),
                value: Some(value.clone()),
                score,
            });
        }
    }

    if let Some(rarest_trait) = rarest {
        return Some(ScoredItem {
            item,
            total_score,
            rarest_trait,
        });
    }

    let featured = item.featured_attribute(config)?;
    Some(ScoredItem {
        item,
        total_score: FEATURED_SENTINEL_SCORE,
        rarest_trait: RarestTrait {
            trait_type: config.reserved.featured.clone(),
            value: featured.value.clone(),
            score: FEATURED_SENTINEL_SCORE,
        },
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(
            prop::collection::vec((0..3usize, 0..4usize), 0..4),
            1..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, traits)| {
                    let mut item = Item::new(i.to_string(), format!("Item #{}", i));
                    for (t, v) in traits {
                        item = item.with_attribute(format!("type{}", t), format!("value{}", v));
                    }
                    item
                })
                .collect()
        })
    }

    proptest! {
        /// Property: every counted pair scores exactly N / frequency
        #[test]
        fn test_score_formula(items in arb_items()) {
            let config = TraitConfig::default();
            let table = TraitFrequencyTable::aggregate(&items, &config);
            for entry in table.entries() {
                prop_assert!(entry.count >= 1);
                let expected = items.len() as f64 / entry.count as f64;
                prop_assert_eq!(table.score(&entry.trait_type, &entry.value), Some(expected));
            }
        }

        /// Property: an item's total equals the sum of its trait scores
        #[test]
        fn test_total_score_summation(items in arb_items()) {
            let config = TraitConfig::default();
            let table = TraitFrequencyTable::aggregate(&items, &config);
            for scored in score_items(&items, &table, &config) {
                let expected: f64 = scored
                    .item
                    .attributes
                    .iter()
                    .filter_map(|a| a.scorable_pair(&config))
                    .map(|(t, v)| table.score(t, v).unwrap())
                    .sum();
                prop_assert_eq!(scored.total_score, expected);
            }
        }
    }
}
