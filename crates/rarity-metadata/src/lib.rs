//! Rarity Metadata Layer
//!
//! Reads collection metadata JSON into domain [`Item`](rarity_domain::Item)s
//! and writes computed ranks back into the original document.
//!
//! # Accepted shapes
//!
//! - a bare array of item objects
//! - an object whose `collection_items` key holds the array
//! - an object whose `items` key holds the array
//!
//! Everything outside the item attributes is carried through untouched,
//! including key order.
//!
//! # Examples
//!
//! ```no_run
//! use rarity_domain::{compute_rarity, TraitConfig};
//! use rarity_metadata::CollectionDocument;
//!
//! let mut doc = CollectionDocument::load("collection.json").unwrap();
//! let items = doc.extract_items();
//! let config = TraitConfig::default();
//! let run = compute_rarity(&items, &config).unwrap();
//! doc.apply_ranks(&items, &run.ranking.assignment, &config);
//! doc.save("collection-new1.json").unwrap();
//! ```

#![warn(missing_docs)]

mod convert;
mod document;
mod error;
mod writeback;

pub use convert::item_from_value;
pub use document::{CollectionDocument, ItemsKey};
pub use error::{MetadataError, Result};
pub use writeback::apply_rank;
