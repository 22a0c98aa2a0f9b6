//! Selector core for the axle vehicle fitment engine.
//!
//! # Scope
//!
//! This crate implements the logic behind a multi-step vehicle selector:
//!
//! - **Option resolution** ([`options`]) - the candidate list for each field
//!   given the fields chosen so far, including the "I don't know" sentinel
//!   and its union-of-subtrees aggregation semantics.
//! - **Selection state** ([`selection`]) - the prefix-consistent record of
//!   field assignments and its derived summaries.
//! - **Step state machine** ([`step`], [`Selector`]) - which group of fields
//!   is active, auto-advance on submodel and transmission, guarded forward
//!   navigation, and clearing cascades.
//! - **Resolution** ([`resolve`]) - turning a completed selection into a
//!   redirect URL and a compatibility classification.
//!
//! # Not Included
//!
//! Rendering, dropdown positioning, debounced input filtering, focus timing,
//! and persistence all live in the UI adapter that consumes this crate. The
//! adapter calls these synchronous operations and reacts to the
//! [`SelectorEvent`]s they return; timing policy never changes the outcome of
//! a sequence of calls.

pub mod config;
pub mod error;
pub mod event;
pub mod options;
pub mod resolve;
pub mod selection;
pub mod selector;
pub mod step;

pub use config::{SetConfigOptions, VehicleConfig};
pub use error::SelectorError;
pub use event::SelectorEvent;
pub use resolve::{CompatibilityEntry, MatchType, Outcome};
pub use selection::{Selection, UNKNOWN};
pub use selector::Selector;
pub use step::{NavigationRejected, Step};
