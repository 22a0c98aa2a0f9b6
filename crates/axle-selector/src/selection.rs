//! The prefix-consistent record of field assignments.

use axle_fitment::Field;

use crate::config::VehicleConfig;

/// Reserved selectable value meaning "match any option at this level".
///
/// Valid for submodel, chassis, engine, and transmission only. Choosing it
/// makes option resolution for deeper fields aggregate across every matching
/// subtree instead of a single branch.
pub const UNKNOWN: &str = "I don't know";

/// The current field → value assignments.
///
/// The mutators maintain prefix consistency: if a field is unset, every
/// deeper field is unset too. Assigning a different value to a field
/// invalidates everything after it before the new value is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: [Option<String>; Field::COUNT],
}

impl Selection {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value assigned to a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Whether a field has an assigned value (the sentinel counts).
    #[must_use]
    pub fn is_set(&self, field: Field) -> bool {
        self.values[field.index()].is_some()
    }

    /// Whether a field is assigned the unknown sentinel.
    #[must_use]
    pub fn is_unknown(&self, field: Field) -> bool {
        self.get(field) == Some(UNKNOWN)
    }

    /// Assign a value to a field.
    ///
    /// If the field already held a different value (or no value), every
    /// deeper field is cleared first so derived option lists stay coherent.
    /// Returns whether the stored value actually changed.
    pub fn assign(&mut self, field: Field, value: &str) -> bool {
        let changed = self.get(field) != Some(value);
        if changed {
            if let Some(next) = field.next() {
                self.clear_from(next);
            }
            self.values[field.index()] = Some(value.to_string());
        }
        changed
    }

    /// Unset a field and every field after it.
    pub fn clear_from(&mut self, field: Field) {
        for slot in &mut self.values[field.index()..] {
            *slot = None;
        }
    }

    /// Whether every one of the given fields is assigned.
    #[must_use]
    pub fn is_complete_for(&self, fields: &[Field]) -> bool {
        fields.iter().all(|field| self.is_set(*field))
    }

    /// Whether all seven fields are assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete_for(&Field::ALL)
    }

    /// The first of the given fields without an assigned value.
    #[must_use]
    pub fn first_unset_in(&self, fields: &[Field]) -> Option<Field> {
        fields.iter().copied().find(|field| !self.is_set(*field))
    }

    /// Human-readable summary of the assigned values, sentinel excluded,
    /// joined with `", "`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.joined(&Field::ALL, ", ")
    }

    /// Short summary of the vehicle-identifying fields (year through
    /// submodel), sentinel excluded, space-joined. Shown while the
    /// drivetrain step is being filled in.
    #[must_use]
    pub fn vehicle_summary(&self) -> String {
        self.joined(&VEHICLE_FIELDS, " ")
    }

    fn joined(&self, fields: &[Field], separator: &str) -> String {
        let parts: Vec<&str> = fields
            .iter()
            .filter_map(|field| self.get(*field))
            .filter(|value| *value != UNKNOWN)
            .collect();
        parts.join(separator)
    }

    /// Plain configuration record of the current assignments, suitable for
    /// handing to collaborators (such as a saved-vehicles widget).
    #[must_use]
    pub fn snapshot(&self) -> VehicleConfig {
        let mut config = VehicleConfig::default();
        for field in Field::ALL {
            config.set(field, self.get(field).map(str::to_string));
        }
        config
    }
}

/// The vehicle-identifying fields covered by the intermediary summary.
const VEHICLE_FIELDS: [Field; 4] = [Field::Year, Field::Make, Field::Model, Field::Submodel];

#[cfg(test)]
mod tests {
    use super::{Field, Selection, UNKNOWN};

    fn filled() -> Selection {
        let mut selection = Selection::new();
        for (field, value) in [
            (Field::Year, "2019"),
            (Field::Make, "Porsche"),
            (Field::Model, "911"),
            (Field::Submodel, "Carrera"),
            (Field::Chassis, "2dr Coupe"),
            (Field::Engine, "3.0L Twin Turbo H6 379hp"),
            (Field::Transmission, "8-speed PDK"),
        ] {
            let _ = selection.assign(field, value);
        }
        selection
    }

    #[test]
    fn assign_clears_deeper_fields_on_change() {
        let mut selection = filled();
        assert!(selection.is_complete());

        assert!(selection.assign(Field::Make, "Audi"));
        assert_eq!(selection.get(Field::Year), Some("2019"));
        assert_eq!(selection.get(Field::Make), Some("Audi"));
        for field in [Field::Model, Field::Submodel, Field::Chassis, Field::Engine, Field::Transmission] {
            assert!(!selection.is_set(field), "{field} should have been cleared");
        }
    }

    #[test]
    fn reassigning_the_same_value_keeps_deeper_fields() {
        let mut selection = filled();
        assert!(!selection.assign(Field::Make, "Porsche"));
        assert!(selection.is_complete());
    }

    #[test]
    fn prefix_consistency_holds_after_arbitrary_mutation() {
        let mut selection = filled();
        let _ = selection.assign(Field::Submodel, UNKNOWN);
        selection.clear_from(Field::Engine);
        let _ = selection.assign(Field::Chassis, "2dr Targa");

        let mut seen_unset = false;
        for field in Field::ALL {
            if !selection.is_set(field) {
                seen_unset = true;
            } else {
                assert!(!seen_unset, "{field} is set after an unset field");
            }
        }
    }

    #[test]
    fn summaries_exclude_the_sentinel() {
        let mut selection = filled();
        let _ = selection.assign(Field::Submodel, UNKNOWN);
        let _ = selection.assign(Field::Chassis, "2dr Coupe");
        assert_eq!(selection.vehicle_summary(), "2019 Porsche 911");
        assert_eq!(selection.summary(), "2019, Porsche, 911, 2dr Coupe");
    }

    #[test]
    fn snapshot_round_trips_through_config() {
        let selection = filled();
        let config = selection.snapshot();
        assert_eq!(config.get(Field::Year), Some("2019"));
        assert_eq!(config.get(Field::Transmission), Some("8-speed PDK"));
        assert!(config.is_complete());
    }
}
