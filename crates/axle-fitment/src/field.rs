//! The seven ordered selection dimensions.

use strum_macros::Display;

/// One of the seven ordered selection dimensions, from broadest (year) to
/// most specific (transmission).
///
/// Field order is load-bearing: a selection must always be a contiguous
/// prefix of this order, and each field's option set is derived from the
/// values chosen for the fields before it. The `Display` form is the wire
/// name used in configuration records and query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    /// Model year. Options are the dataset root keys, newest first.
    Year,
    /// Manufacturer name under the chosen year.
    Make,
    /// Model name under the chosen make.
    Model,
    /// Trim/submodel name. First field that accepts the unknown sentinel.
    Submodel,
    /// Body/chassis style.
    Chassis,
    /// Engine description.
    Engine,
    /// Transmission label, read from the leaf arrays of the dataset.
    Transmission,
}

impl Field {
    /// Number of selection fields.
    pub const COUNT: usize = 7;

    /// All fields in selection order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Year,
        Self::Make,
        Self::Model,
        Self::Submodel,
        Self::Chassis,
        Self::Engine,
        Self::Transmission,
    ];

    /// Position of this field in selection order (0 for year, 6 for
    /// transmission).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Field at the given selection-order position, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Year),
            1 => Some(Self::Make),
            2 => Some(Self::Model),
            3 => Some(Self::Submodel),
            4 => Some(Self::Chassis),
            5 => Some(Self::Engine),
            6 => Some(Self::Transmission),
            _ => None,
        }
    }

    /// The field after this one in selection order.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The field before this one in selection order.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index() {
            0 => None,
            i => Self::from_index(i - 1),
        }
    }

    /// Whether the "I don't know" sentinel is a valid value for this field.
    ///
    /// Year, make, and model must always be concrete; everything deeper may
    /// be left unknown and resolved against the union of the matching
    /// subtrees.
    #[must_use]
    pub const fn allows_unknown(self) -> bool {
        matches!(
            self,
            Self::Submodel | Self::Chassis | Self::Engine | Self::Transmission
        )
    }
}
