//! Deduplicated warnings for tolerated-but-degraded operations.
//!
//! Listing paths in the selector swallow stale lookups (for example a stored
//! selection referencing a year no longer present in the dataset) instead of
//! failing, and report them here. Each unique message prints once; loading a
//! fresh dataset resets the record so the same degradation is reported again
//! against the new data.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

static EMITTED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

fn emitted() -> &'static Mutex<HashSet<String>> {
    EMITTED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Report a degraded operation, printing at most once per unique message.
///
/// Returns whether the warning was actually emitted, so callers and tests
/// can distinguish a first report from a suppressed repeat.
///
/// # Panics
/// Panics if the warning registry mutex is poisoned.
#[must_use = "reports whether the warning was emitted or suppressed"]
pub fn warn_once(component: &str, message: &str) -> bool {
    let fresh = match emitted().lock() {
        Ok(mut seen) => seen.insert(format!("{component}: {message}")),
        Err(poisoned) => panic!("warning registry poisoned: {poisoned}"),
    };
    if fresh {
        eprintln!("{YELLOW}[Axle {component}] ⚠ {message}{RESET}");
    }
    fresh
}

/// Forget every recorded warning.
///
/// Dataset loading calls this so warnings tied to the previous dataset's
/// contents fire again if they still apply to the new one.
///
/// # Panics
/// Panics if the warning registry mutex is poisoned.
pub fn clear_warnings() {
    match emitted().lock() {
        Ok(mut seen) => seen.clear(),
        Err(poisoned) => panic!("warning registry poisoned: {poisoned}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{clear_warnings, warn_once};

    // One test so the shared registry is not raced by parallel assertions.
    #[test]
    fn repeats_are_suppressed_until_cleared() {
        assert!(warn_once("Registry", "dataset entry vanished"));
        assert!(!warn_once("Registry", "dataset entry vanished"));
        assert!(warn_once("Registry", "a different degradation"));

        clear_warnings();
        assert!(warn_once("Registry", "dataset entry vanished"));
    }
}
