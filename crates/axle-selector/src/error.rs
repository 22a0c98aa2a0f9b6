//! The selector error taxonomy.

use axle_fitment::Field;
use thiserror::Error;

/// Errors surfaced across the selector boundary.
///
/// Option *listing* never returns these: a failed traversal while browsing
/// degrades to an empty option list. They are reserved for resolution (where
/// a silent partial success would be misleading) and for programmatic
/// configuration calls (which must be rejected atomically).
#[derive(Debug, Error)]
pub enum SelectorError {
    /// A logically-required dataset key was absent. Can occur when a stored
    /// selection references data the tree no longer carries.
    #[error("dataset has no entry for {field} {label:?}")]
    DataLookup {
        /// The field whose label failed to resolve.
        field: Field,
        /// The label that was looked up.
        label: String,
    },

    /// The selection is complete but no usable redirect base URL exists for
    /// the requested context or the `default` fallback.
    #[error("no redirect URL for context {context:?} and no default")]
    NoRedirectUrl {
        /// The context label that was requested.
        context: String,
    },

    /// A programmatic call supplied a malformed or out-of-order field set.
    /// The selector state is left untouched.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
