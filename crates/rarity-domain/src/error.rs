//! Domain error types

use thiserror::Error;

/// Errors raised by the rarity pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RarityError {
    /// The collection holds no items, so there is nothing to rank
    #[error("No items found in metadata")]
    EmptyCollection,

    /// A link template without an `{id}` placeholder
    #[error("Invalid link template '{0}': missing {{id}} placeholder")]
    InvalidLinkTemplate(String),
}
