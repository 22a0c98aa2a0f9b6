//! Errors reported while loading a fitment dataset.

use thiserror::Error;

/// A fitment dataset could not be loaded.
///
/// These are fail-fast errors: a tree that loads successfully is structurally
/// sound, so downstream traversal code never needs to re-validate shapes.
#[derive(Debug, Error)]
pub enum DataError {
    /// The input was not valid JSON at all.
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top level of the dataset was not an object keyed by year.
    #[error("dataset root must be an object keyed by year")]
    RootShape,

    /// A root key could not be read as a model year.
    #[error("year key {0:?} is not a number")]
    YearKey(String),

    /// A node was neither an object (branch) nor an array (transmission leaf).
    #[error("node at {path:?} must be an object or an array of transmissions")]
    NodeShape {
        /// Slash-joined labels from the root to the offending node.
        path: String,
    },

    /// A leaf array contained something other than transmission label strings.
    #[error("transmission list at {path:?} must contain only strings")]
    LeafShape {
        /// Slash-joined labels from the root to the offending node.
        path: String,
    },

    /// A `redirectUrls` entry did not map context labels to URL strings.
    #[error("redirect map at {path:?} must map context labels to URL strings")]
    RedirectShape {
        /// Slash-joined labels from the root to the offending node.
        path: String,
    },
}
