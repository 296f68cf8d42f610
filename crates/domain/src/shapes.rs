// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drawn-shape coordinates and derived measurements.
//!
//! The canonical coordinate payload of every shape is a non-empty list of
//! `[longitude, latitude]` pairs. A circle stores its center as the single
//! element of that list. A bare top-level pair is the legacy corrupted format
//! and is always rejected, never repaired.

use crate::error::ValidationError;
use geo::{Coord, GeodesicArea, LineString, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::f64::consts::PI;

/// A `[longitude, latitude]` pair.
pub type Position = [f64; 2];

/// The kind of a user-drawn shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeType {
    /// A single location.
    Point,
    /// A closed polygon.
    Polygon,
    /// A circle given by center and `radius` property.
    Circle,
    /// An axis-aligned rectangle stored as a polygon ring.
    Rectangle,
    /// An open polyline.
    Line,
    /// Any other drawing tool.
    Other(String),
}

impl ShapeType {
    /// Returns the lowercase storage form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Point => "point",
            Self::Polygon => "polygon",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Line => "line",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for ShapeType {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "point" | "marker" => Self::Point,
            "polygon" => Self::Polygon,
            "circle" => Self::Circle,
            "rectangle" => Self::Rectangle,
            "line" | "polyline" => Self::Line,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for ShapeType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ShapeType> for String {
    fn from(value: ShapeType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalizes a drawn shape's coordinate payload.
///
/// The decision table, checked in order:
///
/// 1. absent or null: `MissingCoordinates`
/// 2. a string: `InvalidFormat` (callers must deserialize first)
/// 3. not a list, or an empty list: `InvalidFormat`
/// 4. first element is a pair of numbers: valid nested format, returned
///    unchanged
/// 5. exactly two bare numbers: `LegacyFlatFormat`
/// 6. anything else: `InvalidFormat`
///
/// This table is also the detection policy for purging corrupted stored
/// records, so a flat pair is never wrapped into `[[lon, lat]]`.
///
/// # Arguments
///
/// * `raw` - The submitted coordinates
/// * `shape_type` - The shape the coordinates belong to
///
/// # Returns
///
/// The coordinates as a list of positions, identical to the input.
///
/// # Errors
///
/// Returns a `ValidationError` as described by the decision table. In the
/// nested format, every further element must also be a pair of numbers.
pub fn normalize_coordinates(
    raw: Option<&Value>,
    shape_type: &ShapeType,
) -> Result<Vec<Position>, ValidationError> {
    let elements: &Vec<Value> = match raw {
        None | Some(Value::Null) => return Err(ValidationError::MissingCoordinates),
        Some(Value::String(_)) => {
            return Err(ValidationError::invalid_format(
                "Coordinates must not be a pre-serialized string",
            ));
        }
        Some(Value::Array(elements)) if !elements.is_empty() => elements,
        Some(_) => {
            return Err(ValidationError::invalid_format(
                "Coordinates must be a non-empty list",
            ));
        }
    };

    if as_position(&elements[0]).is_some() {
        return elements
            .iter()
            .enumerate()
            .map(|(i, element)| {
                as_position(element).ok_or_else(|| {
                    ValidationError::invalid_format(format!(
                        "Coordinate at position {i} must be a [longitude, latitude] pair"
                    ))
                })
            })
            .collect();
    }

    if elements.len() == 2 && elements.iter().all(Value::is_number) {
        return Err(ValidationError::LegacyFlatFormat {
            shape_type: shape_type.to_string(),
        });
    }

    Err(ValidationError::invalid_format(format!(
        "Unrecognized coordinate structure for {shape_type}"
    )))
}

/// Reads a JSON value as a pair of numbers.
pub(crate) fn as_position(value: &Value) -> Option<Position> {
    match value.as_array()?.as_slice() {
        [lon, lat] => Some([lon.as_f64()?, lat.as_f64()?]),
        _ => None,
    }
}

/// Area and perimeter derived from a shape's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeMeasurements {
    /// Enclosed area in square meters.
    pub area_sq_meters: f64,
    /// Boundary length in meters.
    pub perimeter_meters: f64,
}

impl ShapeMeasurements {
    /// Returns whether both measurements are finite numbers.
    ///
    /// Latitudes outside the WGS84 range or an enormous radius yield NaN or
    /// infinity, which cannot be stored.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.area_sq_meters.is_finite() && self.perimeter_meters.is_finite()
    }
}

/// Derives the area and perimeter of a normalized shape.
///
/// Polygons and rectangles are measured geodesically on their outer ring,
/// closing it if needed. Circles use the `radius` property in meters. Every
/// other shape encloses no area.
///
/// # Arguments
///
/// * `shape_type` - The kind of shape
/// * `coordinates` - Normalized coordinates
/// * `properties` - The shape's free-form properties
#[must_use]
pub fn measure_shape(
    shape_type: &ShapeType,
    coordinates: &[Position],
    properties: &Value,
) -> ShapeMeasurements {
    match shape_type {
        ShapeType::Polygon | ShapeType::Rectangle if coordinates.len() >= 3 => {
            let ring: LineString<f64> = coordinates
                .iter()
                .map(|[x, y]| Coord { x: *x, y: *y })
                .collect();
            // Polygon::new closes the ring
            let polygon: Polygon<f64> = Polygon::new(ring, vec![]);
            ShapeMeasurements {
                area_sq_meters: polygon.geodesic_area_unsigned(),
                perimeter_meters: polygon.geodesic_perimeter(),
            }
        }
        ShapeType::Circle => {
            let radius: f64 = properties
                .get("radius")
                .and_then(Value::as_f64)
                .filter(|r| r.is_finite() && *r > 0.0)
                .unwrap_or(0.0);
            ShapeMeasurements {
                area_sq_meters: PI * radius * radius,
                perimeter_meters: 2.0 * PI * radius,
            }
        }
        _ => ShapeMeasurements::default(),
    }
}
