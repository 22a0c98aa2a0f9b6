//! Notifications emitted by selector operations.

use crate::config::VehicleConfig;
use crate::resolve::Outcome;
use crate::step::Step;

/// A notification produced by a mutating selector operation.
///
/// Events are returned from the call that caused them rather than pushed
/// through a channel; the UI adapter decides what (if anything) to do with
/// each one. Dropping an event never affects selector state.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    /// The active step changed, by auto-advance or manual navigation.
    StepChanged {
        /// Step that was active before the transition.
        from: Step,
        /// Step that is active now.
        to: Step,
    },
    /// All seven fields are assigned.
    Completed {
        /// Snapshot of the completed configuration.
        values: VehicleConfig,
        /// Human-readable summary of the configuration.
        summary: String,
    },
    /// A fully-complete selection was discarded by a reset.
    Reset {
        /// The configuration that was discarded.
        previous: VehicleConfig,
        /// Summary of the discarded configuration.
        previous_summary: String,
    },
    /// Resolution produced a redirect URL and compatibility verdict.
    Resolved {
        /// The resolved outcome, including the redirect URL.
        outcome: Outcome,
    },
    /// Resolution could not produce a redirect URL. The accompanying outcome
    /// carries a `None` URL; this event tells the caller why.
    ResolutionFailed {
        /// Human-readable description of the failure.
        message: String,
    },
}
