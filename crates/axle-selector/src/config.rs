//! The plain configuration record exchanged with collaborators.

use axle_fitment::Field;
use serde::{Deserialize, Serialize};

/// A vehicle configuration as a plain record.
///
/// This is the shape collaborators see: the saved-vehicles widget persists
/// these, and programmatic callers hand one to
/// [`Selector::set_configuration`](crate::Selector::set_configuration) to
/// replay it. Unset fields serialize as absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Model year, as the label string the selector displays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Manufacturer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Submodel/trim name, possibly the unknown sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submodel: Option<String>,
    /// Chassis style, possibly the unknown sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis: Option<String>,
    /// Engine description, possibly the unknown sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// Transmission label, possibly the unknown sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
}

impl VehicleConfig {
    /// The value recorded for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Year => self.year.as_deref(),
            Field::Make => self.make.as_deref(),
            Field::Model => self.model.as_deref(),
            Field::Submodel => self.submodel.as_deref(),
            Field::Chassis => self.chassis.as_deref(),
            Field::Engine => self.engine.as_deref(),
            Field::Transmission => self.transmission.as_deref(),
        }
    }

    /// Record (or unset) the value for a field.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::Year => &mut self.year,
            Field::Make => &mut self.make,
            Field::Model => &mut self.model,
            Field::Submodel => &mut self.submodel,
            Field::Chassis => &mut self.chassis,
            Field::Engine => &mut self.engine,
            Field::Transmission => &mut self.transmission,
        };
        *slot = value;
    }

    /// Whether any field at all is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Whether all seven fields are recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_some())
    }

    /// Whether the recorded fields form a contiguous prefix of the field
    /// order (no gaps such as a chassis without a submodel).
    #[must_use]
    pub fn is_contiguous_prefix(&self) -> bool {
        let mut seen_unset = false;
        for field in Field::ALL {
            match self.get(field) {
                Some(_) if seen_unset => return false,
                Some(_) => {}
                None => seen_unset = true,
            }
        }
        true
    }
}

/// Options for programmatic configuration replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetConfigOptions {
    /// Emit the events the replayed assignments would normally produce.
    /// Off by default so a silent restore doesn't fire completion handlers.
    pub trigger_events: bool,
    /// Validate the record (contiguity, sentinel placement) before applying.
    pub validate: bool,
}

impl Default for SetConfigOptions {
    fn default() -> Self {
        Self {
            trigger_events: false,
            validate: true,
        }
    }
}
