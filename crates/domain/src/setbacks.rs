// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Setback distances and boundary-edge labels of a parcel.

use crate::error::ValidationError;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// The four required setback distances of a parcel, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setbacks {
    /// Distance from the front boundary.
    pub front: f64,
    /// Distance from the rear boundary.
    pub rear: f64,
    /// Distance from the left side boundary.
    pub side_left: f64,
    /// Distance from the right side boundary.
    pub side_right: f64,
}

impl Setbacks {
    /// Returns the distance required from the given side.
    #[must_use]
    pub const fn for_side(&self, side: SetbackSide) -> f64 {
        match side {
            SetbackSide::Front => self.front,
            SetbackSide::Rear => self.rear,
            SetbackSide::Left => self.side_left,
            SetbackSide::Right => self.side_right,
        }
    }
}

/// A boundary direction that a setback applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetbackSide {
    /// The street-facing boundary.
    Front,
    /// The boundary opposite the front.
    Rear,
    /// The left side boundary.
    Left,
    /// The right side boundary.
    Right,
}

impl SetbackSide {
    /// Returns the lowercase storage form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Rear => "rear",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for SetbackSide {
    type Err = ValidationError;

    /// Parses a label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "rear" => Ok(Self::Rear),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ValidationError::invalid_format(format!(
                "Edge label '{s}' must be one of front, rear, left, right"
            ))),
        }
    }
}

impl std::fmt::Display for SetbackSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Associates one boundary segment of a parcel with a setback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeLabel {
    /// Index of the segment in the boundary ring.
    pub edge_index: usize,
    /// The setback direction of the segment.
    pub label: SetbackSide,
}

/// Validates and normalizes a submitted setback record.
///
/// Accepts `front`, `rear`, `sideLeft` (or `left`) and `sideRight` (or
/// `right`). Presence of all four fields is checked before any sign check, so
/// a partial update is always reported as a missing field.
///
/// # Arguments
///
/// * `raw` - The submitted JSON object
///
/// # Returns
///
/// The setbacks under canonical keys.
///
/// # Errors
///
/// Returns an error if:
/// - `raw` is not an object (`InvalidFormat`)
/// - Any of the four distances is absent or not a number (`MissingField`)
/// - Any distance is negative (`Negative`)
pub fn validate_setbacks(raw: &Value) -> Result<Setbacks, ValidationError> {
    let Some(object) = raw.as_object() else {
        return Err(ValidationError::invalid_format(
            "Setbacks must be an object",
        ));
    };

    let front: f64 = required_distance(object, "front", &["front"])?;
    let rear: f64 = required_distance(object, "rear", &["rear"])?;
    let side_left: f64 = required_distance(object, "sideLeft", &["sideLeft", "left"])?;
    let side_right: f64 = required_distance(object, "sideRight", &["sideRight", "right"])?;

    let setbacks: Setbacks = Setbacks {
        front,
        rear,
        side_left,
        side_right,
    };

    for (field, value) in [
        ("front", front),
        ("rear", rear),
        ("sideLeft", side_left),
        ("sideRight", side_right),
    ] {
        if value < 0.0 {
            return Err(ValidationError::Negative {
                field,
                value: value.to_string(),
            });
        }
    }

    Ok(setbacks)
}

/// Reads the first present key among `keys` as a finite number.
fn required_distance(
    object: &Map<String, Value>,
    field: &'static str,
    keys: &[&str],
) -> Result<f64, ValidationError> {
    keys.iter()
        .find_map(|key| object.get(*key).filter(|v| !v.is_null()))
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::MissingField { field })
}

/// Validates the optional edge labels of a parcel boundary.
///
/// Validation is all-or-nothing: either every label is returned or none is.
/// Structural defects stop at the first offending element. Out-of-range
/// indices are collected across the whole list and reported together.
///
/// # Arguments
///
/// * `raw` - The submitted labels; `None` or JSON null means "no labels"
/// * `ring_length` - The number of edges in the parcel's boundary ring
///
/// # Returns
///
/// The labels in submission order, with lowercase labels.
///
/// # Errors
///
/// Returns an error if:
/// - `raw` is not an array, or an element lacks an integer `edgeIndex` or a
///   valid `label` (`InvalidFormat`)
/// - Any `edgeIndex` is outside `[0, ring_length)` (`EdgeIndexOutOfRange`)
pub fn validate_edge_labels(
    raw: Option<&Value>,
    ring_length: usize,
) -> Result<Vec<EdgeLabel>, ValidationError> {
    let elements: &Vec<Value> = match raw {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(elements)) => elements,
        Some(_) => {
            return Err(ValidationError::invalid_format(
                "Edge labels must be a list",
            ));
        }
    };

    let mut labels: Vec<EdgeLabel> = Vec::with_capacity(elements.len());
    let mut out_of_range: Vec<i128> = Vec::new();

    for (position, element) in elements.iter().enumerate() {
        let Some(object) = element.as_object() else {
            return Err(ValidationError::invalid_format(format!(
                "Edge label at position {position} must be an object"
            )));
        };

        let index: i128 = object
            .get("edgeIndex")
            .or_else(|| object.get("edge_index"))
            .and_then(|value| {
                value
                    .as_i64()
                    .map(i128::from)
                    .or_else(|| value.as_u64().map(i128::from))
            })
            .ok_or_else(|| {
                ValidationError::invalid_format(format!(
                    "Edge label at position {position} must have an integer edgeIndex"
                ))
            })?;

        let label: SetbackSide = match object.get("label").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => text.parse()?,
            _ => {
                return Err(ValidationError::invalid_format(format!(
                    "Edge label at position {position} must have a non-empty label"
                )));
            }
        };

        match index.to_usize().filter(|i| *i < ring_length) {
            Some(edge_index) => labels.push(EdgeLabel { edge_index, label }),
            None => out_of_range.push(index),
        }
    }

    if !out_of_range.is_empty() {
        return Err(ValidationError::EdgeIndexOutOfRange {
            indices: out_of_range,
            ring_length,
        });
    }

    Ok(labels)
}
