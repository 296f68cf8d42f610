// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use citywise_domain::{ShapeType, ValidationError, normalize_coordinates};
use serde_json::Value;

/// A stored shape that no longer passes normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptedShape {
    /// The stored shape id.
    pub shape_id: i64,
    /// Why the shape was rejected.
    pub reason: ValidationError,
}

/// Checks a stored coordinate column against the normalization rules.
///
/// The column holds JSON text. Text that is not JSON, or JSON that decodes to
/// a string (double-encoded payloads), is corrupted like any other payload
/// the normalizer rejects.
///
/// # Errors
///
/// Returns the `ValidationError` that marks the record as corrupted.
pub fn check_stored_coordinates(
    shape_type: &str,
    coordinates_json: &str,
) -> Result<(), ValidationError> {
    let parsed: Value = serde_json::from_str(coordinates_json).map_err(|e| {
        ValidationError::invalid_format(format!("Stored coordinates are not JSON: {e}"))
    })?;
    normalize_coordinates(Some(&parsed), &ShapeType::from(shape_type))?;
    Ok(())
}

/// Finds the stored shapes a purge should delete.
///
/// # Arguments
///
/// * `records` - `(shape_id, shape_type, coordinates_json)` for every stored shape
///
/// # Returns
///
/// The corrupted shapes in input order. Valid shapes are never returned.
#[must_use]
pub fn find_corrupted_shapes<'a, I>(records: I) -> Vec<CorruptedShape>
where
    I: IntoIterator<Item = (i64, &'a str, &'a str)>,
{
    records
        .into_iter()
        .filter_map(|(shape_id, shape_type, coordinates_json)| {
            check_stored_coordinates(shape_type, coordinates_json)
                .err()
                .map(|reason| CorruptedShape { shape_id, reason })
        })
        .collect()
}
