//! Typed vehicle-fitment dataset for the axle selector engine.
//!
//! This crate owns the hierarchical fitment data the selector narrows down:
//! Year → Make → Model → Submodel → Chassis → Engine → [Transmissions].
//!
//! # Design
//!
//! The dataset is a tagged-union tree: a [`FitmentNode`] is either a `Branch`
//! (labeled children plus an optional redirect-URL side map) or a `Leaf`
//! (the transmission labels for one engine). This replaces the duck-typed
//! "object means descend, array means stop" convention of the JSON wire shape
//! with types the compiler can check.
//!
//! Loading is strict: a malformed dataset is rejected with a [`DataError`]
//! up front so traversal of a loaded tree never has to defend against shape
//! surprises.

pub mod error;
pub mod field;
pub mod fold;
pub mod tree;

pub use error::DataError;
pub use field::Field;
pub use tree::{FitmentNode, FitmentTree, REDIRECT_URLS_KEY};
