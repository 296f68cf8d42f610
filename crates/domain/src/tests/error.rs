// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ValidationError;

#[test]
fn test_error_messages_name_the_field() {
    let missing: ValidationError = ValidationError::MissingField { field: "sideRight" };
    assert_eq!(
        missing.to_string(),
        "Field 'sideRight' is required and must be a number"
    );

    let negative: ValidationError = ValidationError::Negative {
        field: "front",
        value: "-5".to_string(),
    };
    assert_eq!(
        negative.to_string(),
        "Field 'front' must not be negative, got -5"
    );
}

#[test]
fn test_out_of_range_message_lists_every_index() {
    let error: ValidationError = ValidationError::EdgeIndexOutOfRange {
        indices: vec![7, -1],
        ring_length: 4,
    };
    assert_eq!(
        error.to_string(),
        "Edge indices [7, -1] are out of range for a boundary with 4 edges"
    );
}

#[test]
fn test_error_kinds_are_distinct() {
    let errors: [ValidationError; 6] = [
        ValidationError::MissingField { field: "front" },
        ValidationError::Negative {
            field: "front",
            value: "-1".to_string(),
        },
        ValidationError::invalid_format("bad"),
        ValidationError::LegacyFlatFormat {
            shape_type: "circle".to_string(),
        },
        ValidationError::EdgeIndexOutOfRange {
            indices: vec![9],
            ring_length: 4,
        },
        ValidationError::MissingCoordinates,
    ];
    let mut kinds: Vec<&str> = errors.iter().map(ValidationError::kind).collect();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), errors.len());
}

#[test]
fn test_legacy_format_message_mentions_shape() {
    let error: ValidationError = ValidationError::LegacyFlatFormat {
        shape_type: "circle".to_string(),
    };
    assert!(error.to_string().contains("circle"));
    assert!(error.to_string().contains("legacy"));
}
