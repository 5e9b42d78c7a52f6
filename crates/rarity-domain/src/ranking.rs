//! Rank assignment
//!
//! Orders scored items by total score and hands out dense ranks. Featured
//! items all share rank 1; everything else counts up from 2 when featured
//! items exist and from 1 otherwise.

use crate::config::TraitConfig;
use crate::item::{Item, ItemId};
use crate::scoring::{RarestTrait, ScoredItem};
use std::collections::{BTreeSet, HashMap};

/// A scored item with its final rank
#[derive(Debug, Clone)]
pub struct RankedEntry<'a> {
    /// The ranked item
    pub item: &'a Item,
    /// Total score used for ordering
    pub total_score: f64,
    /// Rarest trait shown in the rankings report
    pub rarest_trait: RarestTrait,
    /// 1-based rank
    pub rank: usize,
}

/// Identifier to rank lookup used for metadata write-back
///
/// Keys come from [`ItemId::rank_key`]; `None` stands for a null identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankAssignment {
    featured_ids: BTreeSet<Option<String>>,
    ranks: HashMap<Option<String>, usize>,
}

impl RankAssignment {
    /// Distinct rank keys of featured items
    pub fn featured_ids(&self) -> &BTreeSet<Option<String>> {
        &self.featured_ids
    }

    /// Whether the collection has any featured item
    pub fn has_featured(&self) -> bool {
        !self.featured_ids.is_empty()
    }

    /// Rank recorded for an identifier
    pub fn rank_of_id(&self, id: &str) -> Option<usize> {
        self.rank_of_key(Some(id))
    }

    /// Rank recorded under a rank key, `None` being the null identifier
    pub fn rank_of_key(&self, key: Option<&str>) -> Option<usize> {
        self.ranks.get(&key.map(str::to_string)).copied()
    }

    /// Rank to write back into an item's metadata
    ///
    /// Featured items always get 1. Other items are looked up by
    /// [`ItemId::lookup_key`], so dropped items get `None`. Items with a
    /// missing or null identifier share the rank recorded for the null key.
    pub fn rank_for(&self, item: &Item, config: &TraitConfig) -> Option<usize> {
        if item.is_featured(config) {
            return Some(1);
        }
        self.rank_of_key(item.id.lookup_key())
    }
}

/// Result of ranking a collection
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Ranked rows in rank order
    pub entries: Vec<RankedEntry<'a>>,
    /// Lookup for metadata write-back
    pub assignment: RankAssignment,
    /// Collection size N, including dropped items
    pub total_items: usize,
}

impl Ranking<'_> {
    /// Zero-padding width for rank strings
    pub fn width(&self) -> usize {
        rank_width(self.total_items)
    }

    /// Number of ranked featured entries
    pub fn featured_count(&self, config: &TraitConfig) -> usize {
        self.entries
            .iter()
            .filter(|e| e.item.is_featured(config))
            .count()
    }
}

/// Rank scored items
///
/// `items` is the whole collection; featured identifiers are collected from
/// it rather than from `scored`.
pub fn rank_items<'a>(
    mut scored: Vec<ScoredItem<'a>>,
    items: &'a [Item],
    config: &TraitConfig,
) -> Ranking<'a> {
    // Stable: equal totals keep input order
    scored.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

    let featured_ids: BTreeSet<Option<String>> = items
        .iter()
        .filter(|item| item.is_featured(config))
        .map(|item| rank_key_of(&item.id))
        .collect();

    let mut ranks: HashMap<Option<String>, usize> = featured_ids.iter().map(|id| (id.clone(), 1)).collect();
    let mut next_rank = if featured_ids.is_empty() { 1 } else { 2 };
    let mut entries = Vec::with_capacity(scored.len());

    for scored_item in scored {
        let rank = if scored_item.item.is_featured(config) {
            1
        } else {
            next_rank += 1;
            next_rank - 1
        };

        let key = rank_key_of(&scored_item.item.id);
        if !featured_ids.contains(&key) {
            ranks.insert(key, rank);
        }

        entries.push(RankedEntry {
            item: scored_item.item,
            total_score: scored_item.total_score,
            rarest_trait: scored_item.rarest_trait,
            rank,
        });
    }

    // Featured rows may sit anywhere in score order; move them to the top
    entries.sort_by_key(|e| e.rank);

    Ranking {
        entries,
        assignment: RankAssignment { featured_ids, ranks },
        total_items: items.len(),
    }
}

fn rank_key_of(id: &ItemId) -> Option<String> {
    id.rank_key().map(str::to_string)
}

/// Digit count of the collection size
pub fn rank_width(total_items: usize) -> usize {
    total_items.to_string().len()
}

/// Zero-pad a rank to `width`
pub fn pad_rank(rank: usize, width: usize) -> String {
    format!("{:0width$}", rank, width = width)
}

/// Re-pad the `#<number>` suffix of a name to `width`
///
/// Names without exactly one `#`, or whose suffix is not an integer, are
/// returned unchanged. The suffix may carry a sign, surrounding whitespace
/// and single `_` separators between digits, and has no size limit.
pub fn format_display_name(name: &str, width: usize) -> String {
    let parts: Vec<&str> = name.split('#').collect();
    if parts.len() != 2 {
        return name.to_string();
    }

    match parse_integer(parts[1]) {
        Some((negative, digits)) => {
            let number = if negative {
                format!("-{:0>pad$}", digits, pad = width.saturating_sub(1))
            } else {
                format!("{:0>width$}", digits, width = width)
            };
            format!("{} #{}", parts[0].trim(), number)
        }
        None => name.to_string(),
    }
}

/// Sign and canonical digits (no leading zeros) of an integer literal
fn parse_integer(text: &str) -> Option<(bool, String)> {
    let text = text.trim();
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let mut digits = String::with_capacity(body.len());
    for group in body.split('_') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }

    let digits = match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    };
    let negative = negative && digits != "0";
    Some((negative, digits))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::frequency::TraitFrequencyTable;
    use crate::scoring::score_items;
    use proptest::prelude::*;

    /// Items described as (featured, trait value indexes)
    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec((prop::bool::weighted(0.2), prop::collection::vec(0..5usize, 0..3)), 1..40)
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (featured, values))| {
                        let mut item = Item::new(format!("id{}", i), format!("Item #{}", i));
                        if featured {
                            item = item.with_attribute("Featured Artist", format!("artist{}", i));
                        }
                        for (slot, v) in values.into_iter().enumerate() {
                            item = item.with_attribute(format!("slot{}", slot), format!("v{}", v));
                        }
                        item
                    })
                    .collect()
            })
    }

    proptest! {
        /// Property: ranks are dense and featured items share rank 1
        #[test]
        fn test_ranks_are_dense(items in arb_items()) {
            let config = TraitConfig::default();
            let table = TraitFrequencyTable::aggregate(&items, &config);
            let ranking = rank_items(score_items(&items, &table, &config), &items, &config);

            let featured = items.iter().filter(|i| i.is_featured(&config)).count();
            let regular: Vec<usize> = ranking
                .entries
                .iter()
                .filter(|e| !e.item.is_featured(&config))
                .map(|e| e.rank)
                .collect();

            let start = if featured > 0 { 2 } else { 1 };
            let expected: Vec<usize> = (start..start + regular.len()).collect();
            prop_assert_eq!(regular, expected);

            for entry in ranking.entries.iter().filter(|e| e.item.is_featured(&config)) {
                prop_assert_eq!(entry.rank, 1);
            }
            for item in items.iter().filter(|i| i.is_featured(&config)) {
                prop_assert_eq!(ranking.assignment.rank_for(item, &config), Some(1));
            }
        }

        /// Property: rows come out in non-decreasing rank order
        #[test]
        fn test_rows_sorted_by_rank(items in arb_items()) {
            let config = TraitConfig::default();
            let table = TraitFrequencyTable::aggregate(&items, &config);
            let ranking = rank_items(score_items(&items, &table, &config), &items, &config);
            for pair in ranking.entries.windows(2) {
                prop_assert!(pair[0].rank <= pair[1].rank);
            }
        }

        /// Property: every padded rank has the width of N's digit count
        #[test]
        fn test_rank_width(total in 1usize..100_000, rank_seed in 0usize..100_000) {
            let rank = rank_seed % total + 1;
            let width = rank_width(total);
            prop_assert_eq!(pad_rank(rank, width).len(), total.to_string().len());
        }
    }
}
