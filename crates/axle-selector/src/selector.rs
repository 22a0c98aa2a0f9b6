//! The selector state machine.
//!
//! [`Selector`] owns the selection and the two-axis progression state (active
//! step × focused field) and enforces the transition rules: auto-advance into
//! the drivetrain step when the submodel is set, auto-advance to the summary
//! when the transmission is set, completeness-gated forward navigation, and
//! clearing cascades that pull the active step back to wherever editing
//! resumed.

use axle_fitment::{Field, FitmentTree};

use crate::config::{SetConfigOptions, VehicleConfig};
use crate::error::SelectorError;
use crate::event::SelectorEvent;
use crate::options;
use crate::resolve::{self, CompatibilityEntry, Outcome};
use crate::selection::{Selection, UNKNOWN};
use crate::step::{NavigationRejected, Step};

/// The vehicle selector: selection state plus step progression.
///
/// All operations are synchronous and return the events they caused; there
/// is no background work to cancel. One instance models one user session and
/// expects at most one in-flight mutation at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    selection: Selection,
    step: Step,
    cursor: Option<Field>,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// A fresh selector: vehicle step active, year field focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
            step: Step::Vehicle,
            cursor: Some(Field::Year),
        }
    }

    /// The currently active step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// The field currently holding input focus, if any. `None` on the
    /// summary step.
    #[must_use]
    pub fn cursor(&self) -> Option<Field> {
        self.cursor
    }

    /// The underlying selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Plain snapshot of the current assignments.
    #[must_use]
    pub fn state(&self) -> VehicleConfig {
        self.selection.snapshot()
    }

    /// Candidate values for a field given the current selection.
    #[must_use]
    pub fn options_for_field(&self, field: Field, tree: &FitmentTree) -> Vec<String> {
        options::options_for(field, &self.selection, tree)
    }

    /// Assign a value to a field and advance the progression state.
    ///
    /// The value is stored exactly as given, so a caller holding the label
    /// it assigned can compare it against [`Selector::state`] verbatim.
    ///
    /// Setting the submodel always forces the drivetrain step with the
    /// chassis focused; setting the transmission moves to the summary and
    /// reports completion. Changing an already-set field invalidates every
    /// deeper field first and, when the active step lay beyond the edit,
    /// pulls it back accordingly.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Validation`] when the value is empty or whitespace
    /// only, when the sentinel is used on a field that requires a concrete
    /// value, or when
    /// an earlier field is still unset (assignments must keep the selection
    /// a contiguous prefix).
    pub fn assign_field(
        &mut self,
        field: Field,
        value: &str,
    ) -> Result<Vec<SelectorEvent>, SelectorError> {
        // Stored byte-for-byte: option labels come straight from the dataset,
        // and a silently normalized copy would no longer match them.
        if value.trim().is_empty() {
            return Err(SelectorError::Validation(format!(
                "value for {field} must be a non-empty string"
            )));
        }
        if value == UNKNOWN && !field.allows_unknown() {
            return Err(SelectorError::Validation(format!(
                "{field} cannot be {UNKNOWN:?}"
            )));
        }
        if let Some(previous) = field.previous()
            && !self.selection.is_set(previous)
        {
            return Err(SelectorError::Validation(format!(
                "cannot assign {field} while {previous} is unset"
            )));
        }

        let mut events = Vec::new();
        let changed = self.selection.assign(field, value);
        if changed && let Some(invalidated) = field.next() {
            // Deeper fields were just cleared; if the active step lies past
            // the first invalidated field, editing resumes on its step.
            self.set_step(Step::for_field(invalidated), &mut events);
        }

        match field {
            Field::Submodel => {
                self.set_step(Step::Drivetrain, &mut events);
                self.cursor = Some(Field::Chassis);
            }
            Field::Transmission => {
                self.set_step(Step::Summary, &mut events);
                self.cursor = None;
                events.push(SelectorEvent::Completed {
                    values: self.selection.snapshot(),
                    summary: self.selection.summary(),
                });
            }
            _ => {
                if let Some(next) = field.next()
                    && self.step.fields().contains(&next)
                {
                    self.cursor = Some(next);
                }
            }
        }
        Ok(events)
    }

    /// Clear a field and everything after it, returning focus to it.
    ///
    /// If the cleared field lives on a different step than the active one,
    /// the active step moves to the cleared field's step in either direction.
    pub fn clear_field(&mut self, field: Field) -> Vec<SelectorEvent> {
        self.selection.clear_from(field);
        let mut events = Vec::new();
        self.set_step(Step::for_field(field), &mut events);
        self.cursor = Some(field);
        events
    }

    /// Advance to the next step.
    ///
    /// Entering the drivetrain step always focuses the chassis so re-entry is
    /// deterministic; entering the summary reports completion.
    ///
    /// # Errors
    ///
    /// [`NavigationRejected::Incomplete`] while any field of the active step
    /// is unset, [`NavigationRejected::AtEnd`] on the summary step.
    pub fn navigate_forward(&mut self) -> Result<Vec<SelectorEvent>, NavigationRejected> {
        let Some(next) = self.step.next() else {
            return Err(NavigationRejected::AtEnd);
        };
        if !self.selection.is_complete_for(self.step.fields()) {
            return Err(NavigationRejected::Incomplete(self.step));
        }
        let mut events = Vec::new();
        self.set_step(next, &mut events);
        self.cursor = Self::entry_focus(&self.selection, next);
        if next == Step::Summary {
            events.push(SelectorEvent::Completed {
                values: self.selection.snapshot(),
                summary: self.selection.summary(),
            });
        }
        Ok(events)
    }

    /// Go back one step. Never gated on completeness.
    ///
    /// # Errors
    ///
    /// [`NavigationRejected::AtStart`] on the vehicle step.
    pub fn navigate_backward(&mut self) -> Result<Vec<SelectorEvent>, NavigationRejected> {
        let Some(previous) = self.step.previous() else {
            return Err(NavigationRejected::AtStart);
        };
        let mut events = Vec::new();
        self.set_step(previous, &mut events);
        self.cursor = Self::entry_focus(&self.selection, previous);
        Ok(events)
    }

    /// Discard the selection and return to the initial state.
    ///
    /// Emits a [`SelectorEvent::Reset`] carrying the discarded configuration,
    /// but only when `emit_event` is set and the state being discarded was
    /// fully complete. Resetting an already-empty selector is a no-op that
    /// emits nothing.
    pub fn reset(&mut self, emit_event: bool) -> Vec<SelectorEvent> {
        let was_complete = self.selection.is_complete();
        let previous = self.selection.snapshot();
        let previous_summary = self.selection.summary();

        self.selection = Selection::new();
        self.step = Step::Vehicle;
        self.cursor = Some(Field::Year);

        if emit_event && was_complete {
            vec![SelectorEvent::Reset {
                previous,
                previous_summary,
            }]
        } else {
            Vec::new()
        }
    }

    /// Replay a configuration record as a sequence of field assignments.
    ///
    /// The record is applied in field order onto a freshly reset state, so
    /// the selector ends up exactly where a user would after making those
    /// selections by hand. Application is atomic: a rejected record leaves
    /// the selector untouched. Events from the replayed assignments (and the
    /// completion, if the record is full) are returned only when
    /// `options.trigger_events` is set.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Validation`] when the record is empty, has gaps in
    /// the field order, or puts the sentinel in a field that requires a
    /// concrete value.
    pub fn set_configuration(
        &mut self,
        config: &VehicleConfig,
        options: SetConfigOptions,
    ) -> Result<Vec<SelectorEvent>, SelectorError> {
        if options.validate {
            if config.is_empty() {
                return Err(SelectorError::Validation(
                    "configuration must set at least one field".to_string(),
                ));
            }
            if !config.is_contiguous_prefix() {
                return Err(SelectorError::Validation(
                    "configuration fields must be a contiguous prefix of the field order"
                        .to_string(),
                ));
            }
        }

        // Stage the replay so a mid-flight rejection can't leave a partially
        // applied state behind.
        let mut staged = self.clone();
        let _ = staged.reset(false);
        let mut events = Vec::new();
        for field in Field::ALL {
            if let Some(value) = config.get(field) {
                events.extend(staged.assign_field(field, value)?);
            }
        }
        *self = staged;

        Ok(if options.trigger_events {
            events
        } else {
            Vec::new()
        })
    }

    /// Resolve the completed selection to a redirect URL and compatibility
    /// verdict.
    ///
    /// URL failures are not errors at this boundary: the returned outcome
    /// carries a `None` URL and the event list explains why, so the caller
    /// can render a fallback. The compatibility classification is computed
    /// either way.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Validation`] if any field is still unset.
    pub fn resolve(
        &self,
        tree: &FitmentTree,
        compatibility: &[CompatibilityEntry],
        context: &str,
        reference: Option<&str>,
    ) -> Result<(Outcome, Vec<SelectorEvent>), SelectorError> {
        if !self.selection.is_complete() {
            return Err(SelectorError::Validation(
                "resolution requires all seven fields to be set".to_string(),
            ));
        }

        let match_type = resolve::classify(&self.selection, compatibility);
        let values = self.selection.snapshot();
        let summary = self.selection.summary();

        match resolve::resolve_url(&self.selection, tree, context, reference) {
            Ok(url) => {
                let outcome = Outcome {
                    values,
                    redirect_url: Some(url),
                    match_type,
                    summary,
                };
                let events = vec![SelectorEvent::Resolved {
                    outcome: outcome.clone(),
                }];
                Ok((outcome, events))
            }
            Err(error) => {
                let outcome = Outcome {
                    values,
                    redirect_url: None,
                    match_type,
                    summary,
                };
                let events = vec![SelectorEvent::ResolutionFailed {
                    message: error.to_string(),
                }];
                Ok((outcome, events))
            }
        }
    }

    /// Record a step change, emitting an event only on an actual transition.
    fn set_step(&mut self, to: Step, events: &mut Vec<SelectorEvent>) {
        if self.step != to {
            events.push(SelectorEvent::StepChanged {
                from: self.step,
                to,
            });
            self.step = to;
        }
    }

    /// Where focus lands when a step becomes active through navigation.
    fn entry_focus(selection: &Selection, step: Step) -> Option<Field> {
        match step {
            // First incomplete field, or the first field when all are set.
            Step::Vehicle => selection
                .first_unset_in(step.fields())
                .or(Some(Field::Year)),
            // Always the chassis: a deterministic re-entry point, whether or
            // not the step was completed before.
            Step::Drivetrain => Some(Field::Chassis),
            Step::Summary => None,
        }
    }
}
