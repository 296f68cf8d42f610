// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ParcelBoundary, ValidationError};
use serde_json::json;

#[test]
fn test_closed_ring_does_not_count_closing_position() {
    let boundary: ParcelBoundary =
        ParcelBoundary::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]])
            .unwrap();
    assert_eq!(boundary.edge_count(), 4);
    assert_eq!(boundary.positions().len(), 5);
}

#[test]
fn test_open_ring_counts_every_position() {
    let boundary: ParcelBoundary =
        ParcelBoundary::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).unwrap();
    assert_eq!(boundary.edge_count(), 3);
}

#[test]
fn test_too_short_ring_is_rejected() {
    let result: Result<ParcelBoundary, ValidationError> =
        ParcelBoundary::new(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]);
    assert_eq!(result.unwrap_err().kind(), "invalid_format");
}

#[test]
fn test_boundary_from_geojson_polygon() {
    let raw: serde_json::Value = json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
    });
    let boundary: ParcelBoundary = ParcelBoundary::from_json(&raw).unwrap();
    assert_eq!(boundary.edge_count(), 4);
}

#[test]
fn test_boundary_from_bare_ring() {
    let raw: serde_json::Value = json!([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    let boundary: ParcelBoundary = ParcelBoundary::from_json(&raw).unwrap();
    assert_eq!(boundary.edge_count(), 4);
}

#[test]
fn test_boundary_rejects_malformed_positions() {
    let raw: serde_json::Value = json!([[0.0, 0.0], [1.0], [1.0, 1.0]]);
    assert!(ParcelBoundary::from_json(&raw).is_err());
    assert!(ParcelBoundary::from_json(&json!("polygon")).is_err());
}

#[test]
fn test_boundary_from_geojson_multipolygon_uses_first_outer_ring() {
    let raw: serde_json::Value = json!({
        "type": "MultiPolygon",
        "coordinates": [
            [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]],
            [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]]
        ]
    });
    let boundary: ParcelBoundary = ParcelBoundary::from_json(&raw).unwrap();
    assert_eq!(boundary.edge_count(), 4);
    assert_eq!(boundary.positions()[1], [1.0, 0.0]);
}

#[test]
fn test_boundary_from_geojson_feature() {
    let raw: serde_json::Value = json!({
        "type": "Feature",
        "properties": {"APN": "301-02-003"},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [-112.0, 33.0], [-112.0, 33.001], [-111.999, 33.001],
                [-111.999, 33.0], [-112.0, 33.0]
            ]]
        }
    });
    let boundary: ParcelBoundary = ParcelBoundary::from_json(&raw).unwrap();
    assert_eq!(boundary.edge_count(), 4);
}

#[test]
fn test_boundary_from_feature_collection() {
    let raw: serde_json::Value = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": null,
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [[[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]]]]
            }
        }]
    });
    let boundary: ParcelBoundary = ParcelBoundary::from_json(&raw).unwrap();
    assert_eq!(boundary.edge_count(), 3);
}

#[test]
fn test_boundary_rejects_non_polygon_geometry() {
    let line: serde_json::Value = json!({
        "type": "LineString",
        "coordinates": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
    });
    let error: ValidationError = ParcelBoundary::from_json(&line).unwrap_err();
    assert_eq!(error.kind(), "invalid_format");

    let point: serde_json::Value = json!({"type": "Point", "coordinates": [0.0, 0.0]});
    assert!(ParcelBoundary::from_json(&point).is_err());
}

#[test]
fn test_boundary_rejects_untyped_object() {
    let raw: serde_json::Value = json!({
        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
    });
    assert!(ParcelBoundary::from_json(&raw).is_err());
}

#[test]
fn test_boundary_feature_without_geometry_is_rejected() {
    let raw: serde_json::Value = json!({"type": "Feature", "properties": {}, "geometry": null});
    assert!(ParcelBoundary::from_json(&raw).is_err());
}
