//! Metadata error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for metadata operations
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Errors that can occur while reading or writing collection metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The item container exists but is not an array
    #[error("Expected '{0}' to be an array of items")]
    InvalidShape(String),

    /// No items could be located, or the item array is empty
    #[error("No items found in metadata")]
    NoItems,
}
