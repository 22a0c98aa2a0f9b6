//! Common utilities for the axle selector engine.
//!
//! This crate provides shared infrastructure used by the other engine
//! components:
//! - **Warning System** - colored terminal output for degraded lookups

pub mod warning;
