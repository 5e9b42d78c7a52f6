//! Collection document: the three accepted input shapes

use crate::convert::item_from_value;
use crate::error::{MetadataError, Result};
use crate::writeback::apply_rank;
use rarity_domain::{Item, RankAssignment, TraitConfig};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Key under which a wrapper object stores its items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsKey {
    /// `collection_items`
    CollectionItems,
    /// `items`
    Items,
}

impl ItemsKey {
    /// JSON key name
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemsKey::CollectionItems => "collection_items",
            ItemsKey::Items => "items",
        }
    }
}

/// A parsed metadata document
///
/// Wrapper objects keep every other key so the document can be written back
/// unchanged apart from item attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionDocument {
    /// Bare array of items
    Sequence(Vec<Value>),
    /// Object wrapping the item array under `key`
    Wrapped {
        /// Key holding the item array
        key: ItemsKey,
        /// The full root object
        root: Map<String, Value>,
    },
}

impl CollectionDocument {
    /// Classify a JSON value
    ///
    /// `collection_items` takes precedence over `items`. Fails when no item
    /// array is found or the array is empty.
    pub fn from_value(value: Value) -> Result<Self> {
        let doc = match value {
            Value::Array(items) => CollectionDocument::Sequence(items),
            Value::Object(root) => {
                let key = [ItemsKey::CollectionItems, ItemsKey::Items]
                    .into_iter()
                    .find(|k| root.contains_key(k.as_str()))
                    .ok_or(MetadataError::NoItems)?;
                if !root[key.as_str()].is_array() {
                    return Err(MetadataError::InvalidShape(key.as_str().to_string()));
                }
                CollectionDocument::Wrapped { key, root }
            }
            _ => return Err(MetadataError::NoItems),
        };

        if doc.items().is_empty() {
            return Err(MetadataError::NoItems);
        }
        Ok(doc)
    }

    /// Parse a JSON string
    pub fn parse(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Load and parse a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::parse(&contents)?;
        debug!(path = %path.display(), items = doc.len(), "Loaded collection metadata");
        Ok(doc)
    }

    /// Raw item values
    pub fn items(&self) -> &[Value] {
        match self {
            CollectionDocument::Sequence(items) => items,
            CollectionDocument::Wrapped { key, root } => root
                .get(key.as_str())
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }

    fn items_mut(&mut self) -> &mut [Value] {
        match self {
            CollectionDocument::Sequence(items) => items,
            CollectionDocument::Wrapped { key, root } => root
                .get_mut(key.as_str())
                .and_then(Value::as_array_mut)
                .map(Vec::as_mut_slice)
                .unwrap_or(&mut []),
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether the document holds no items
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Which shape the document had
    pub fn items_key(&self) -> Option<ItemsKey> {
        match self {
            CollectionDocument::Sequence(_) => None,
            CollectionDocument::Wrapped { key, .. } => Some(*key),
        }
    }

    /// Normalize the raw items into domain items, index-aligned with [`items`](Self::items)
    pub fn extract_items(&self) -> Vec<Item> {
        self.items()
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                if !value.is_object() {
                    warn!(index = idx, "Item is not a JSON object, treating it as empty");
                }
                item_from_value(value)
            })
            .collect()
    }

    /// Write ranks into every item that has one
    ///
    /// `items` must come from [`extract_items`](Self::extract_items) on this
    /// document. Returns how many items were updated.
    pub fn apply_ranks(&mut self, items: &[Item], assignment: &RankAssignment, config: &TraitConfig) -> usize {
        let mut updated = 0;
        for (raw, item) in self.items_mut().iter_mut().zip(items) {
            let Some(rank) = assignment.rank_for(item, config) else {
                continue;
            };
            if apply_rank(raw, rank, &config.reserved) {
                updated += 1;
            }
        }
        debug!(updated, "Applied ranks to metadata");
        updated
    }

    /// Pretty-print with 4-space indentation
    pub fn to_pretty_string(&self) -> Result<String> {
        match self {
            CollectionDocument::Sequence(items) => pretty(items),
            CollectionDocument::Wrapped { root, .. } => pretty(root),
        }
    }

    /// Write the pretty-printed document to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_pretty_string()?).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
