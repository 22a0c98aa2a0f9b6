//! The step grouping of the selector's fields.

use axle_fitment::Field;
use strum_macros::Display;
use thiserror::Error;

/// One screen of the multi-step selector.
///
/// Fields are partitioned into two input steps plus a terminal summary.
/// Exactly one step is active at a time; forward movement between steps is
/// gated on completeness, backward movement is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Step {
    /// Year, make, model, and submodel.
    Vehicle,
    /// Chassis, engine, and transmission.
    Drivetrain,
    /// No input fields; the completed configuration is presented here.
    Summary,
}

impl Step {
    /// All steps in navigation order.
    pub const ALL: [Self; 3] = [Self::Vehicle, Self::Drivetrain, Self::Summary];

    /// The fields shown on this step, in selection order.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Vehicle => &[Field::Year, Field::Make, Field::Model, Field::Submodel],
            Self::Drivetrain => &[Field::Chassis, Field::Engine, Field::Transmission],
            Self::Summary => &[],
        }
    }

    /// The step after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Vehicle => Some(Self::Drivetrain),
            Self::Drivetrain => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    /// The step before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Vehicle => None,
            Self::Drivetrain => Some(Self::Vehicle),
            Self::Summary => Some(Self::Drivetrain),
        }
    }

    /// The input step a field belongs to.
    #[must_use]
    pub const fn for_field(field: Field) -> Self {
        if field.index() < 4 {
            Self::Vehicle
        } else {
            Self::Drivetrain
        }
    }
}

/// A navigation request that the state machine refused.
///
/// Rejection leaves the selector untouched; it is an answer, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationRejected {
    /// Forward navigation requires every field of the active step to be
    /// assigned first.
    #[error("cannot advance past the {0} step until all of its fields are set")]
    Incomplete(Step),
    /// There is no step before the vehicle step.
    #[error("already at the first step")]
    AtStart,
    /// There is no step after the summary.
    #[error("already at the last step")]
    AtEnd,
}
