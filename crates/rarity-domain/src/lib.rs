//! Rarity Domain Layer
//!
//! This crate contains the rarity-scoring and ranking core. It performs no I/O
//! and knows nothing about file formats: callers hand it a slice of [`Item`]s
//! and get back frequencies, scores, ranks and rendered reports.
//!
//! ## Key Concepts
//!
//! - **Trait**: a `(trait_type, value)` pair attached to an item
//! - **Rarity score**: `N / frequency` for a trait pair, higher is rarer
//! - **Total score**: sum of an item's scorable trait scores
//! - **Featured item**: carries the featured trait, skips scoring, pinned to rank 1
//! - **Rank**: dense 1-based position after sorting by total score
//!
//! ## Pipeline
//!
//! Aggregate ([`TraitFrequencyTable::aggregate`]) → score ([`score_items`]) →
//! rank ([`rank_items`]) → render ([`render_rankings`], [`render_statistics`]).
//! [`compute_rarity`] runs the first three stages in order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod item;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod statistics;

// Re-exports for convenience
pub use config::{ReservedTraitTypes, TraitConfig};
pub use error::RarityError;
pub use frequency::{TraitFrequency, TraitFrequencyTable};
pub use item::{Attribute, Item, ItemId, TraitValue};
pub use pipeline::{compute_rarity, RarityRun};
pub use ranking::{format_display_name, pad_rank, rank_items, rank_width, RankAssignment, RankedEntry, Ranking};
pub use report::{render_rankings, render_statistics, LinkTemplate};
pub use scoring::{score_items, RarestTrait, ScoredItem, FEATURED_SENTINEL_SCORE};
pub use statistics::{FeaturedTraitCount, TraitStatistics};
