// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Caller-correctable input defects reported by the zoning engine.
///
/// The engine never reports "not found" (absence resolves to empty results)
/// and performs no I/O, so this is its only error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent, null, or not a number.
    MissingField {
        /// The canonical name of the field.
        field: &'static str,
    },
    /// A distance that must be non-negative is negative.
    Negative {
        /// The canonical name of the field.
        field: &'static str,
        /// The offending value, as submitted.
        value: String,
    },
    /// The payload does not have the expected structure.
    InvalidFormat {
        /// Description of the structural defect.
        reason: String,
    },
    /// Coordinates were submitted as a bare `[lon, lat]` pair instead of a
    /// list of pairs.
    LegacyFlatFormat {
        /// The shape type the coordinates were submitted for.
        shape_type: String,
    },
    /// One or more edge labels reference an edge outside the parcel boundary.
    EdgeIndexOutOfRange {
        /// Every offending index, in submission order.
        indices: Vec<i128>,
        /// The number of edges in the boundary ring.
        ring_length: usize,
    },
    /// No coordinates were submitted.
    MissingCoordinates,
}

impl ValidationError {
    /// Creates an `InvalidFormat` error from a reason.
    #[must_use]
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Returns a stable machine-readable name for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::Negative { .. } => "negative",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::LegacyFlatFormat { .. } => "legacy_flat_format",
            Self::EdgeIndexOutOfRange { .. } => "edge_index_out_of_range",
            Self::MissingCoordinates => "missing_coordinates",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "Field '{field}' is required and must be a number")
            }
            Self::Negative { field, value } => {
                write!(f, "Field '{field}' must not be negative, got {value}")
            }
            Self::InvalidFormat { reason } => write!(f, "Invalid format: {reason}"),
            Self::LegacyFlatFormat { shape_type } => {
                write!(
                    f,
                    "Coordinates for {shape_type} use the legacy flat [lon, lat] format; expected [[lon, lat], ...]"
                )
            }
            Self::EdgeIndexOutOfRange {
                indices,
                ring_length,
            } => {
                let listed: Vec<String> = indices.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Edge indices [{}] are out of range for a boundary with {ring_length} edges",
                    listed.join(", ")
                )
            }
            Self::MissingCoordinates => write!(f, "Coordinates are required"),
        }
    }
}

impl std::error::Error for ValidationError {}
