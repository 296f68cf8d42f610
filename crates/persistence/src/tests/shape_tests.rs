// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::setup_persistence_with_project;
use crate::{DrawnShapeData, Persistence, PersistenceError, StoredShapeRecord};
use citywise::{CorruptedShape, NormalizedShape, find_corrupted_shapes};
use citywise_domain::{ShapeMeasurements, ShapeType};
use diesel::prelude::*;
use serde_json::json;

use crate::BackendConnection;
use crate::diesel_schema::drawn_shapes;

fn circle() -> NormalizedShape {
    NormalizedShape {
        shape_type: ShapeType::Circle,
        coordinates: vec![[-112.07, 33.45]],
        measurements: ShapeMeasurements {
            area_sq_meters: 314.159,
            perimeter_meters: 62.83,
        },
        properties: json!({"radius": 10.0}),
    }
}

/// Writes a shape row directly, bypassing normalization.
fn insert_raw_shape(persistence: &mut Persistence, project_id: i64, coordinates_json: &str) {
    let BackendConnection::Sqlite(conn) = &mut persistence.conn else {
        panic!("tests run on SQLite");
    };
    diesel::insert_into(drawn_shapes::table)
        .values((
            drawn_shapes::project_id.eq(project_id),
            drawn_shapes::shape_type.eq("circle"),
            drawn_shapes::coordinates_json.eq(coordinates_json),
            drawn_shapes::properties_json.eq("{}"),
            drawn_shapes::created_at.eq("2025-01-01T00:00:00Z"),
        ))
        .execute(conn)
        .unwrap();
}

#[test]
fn test_insert_and_list_shapes() {
    let (mut persistence, project_id) = setup_persistence_with_project();

    let shape_id: i64 = persistence.insert_shape(project_id, &circle()).unwrap();
    let shapes: Vec<DrawnShapeData> = persistence.list_shapes(project_id).unwrap();

    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].shape_id, shape_id);
    assert_eq!(shapes[0].shape_type, "circle");
    assert_eq!(shapes[0].coordinates, json!([[-112.07, 33.45]]));
    assert_eq!(shapes[0].area_sq_meters, 314.159);
    assert_eq!(shapes[0].properties["radius"], 10.0);
}

#[test]
fn test_insert_shape_requires_project() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<i64, PersistenceError> = persistence.insert_shape(3, &circle());

    assert_eq!(result.unwrap_err(), PersistenceError::ProjectNotFound(3));
}

#[test]
fn test_delete_shape() {
    let (mut persistence, project_id) = setup_persistence_with_project();
    let shape_id: i64 = persistence.insert_shape(project_id, &circle()).unwrap();

    persistence.delete_shape(shape_id).unwrap();

    assert!(persistence.list_shapes(project_id).unwrap().is_empty());
    assert_eq!(
        persistence.delete_shape(shape_id).unwrap_err(),
        PersistenceError::ShapeNotFound(shape_id)
    );
}

#[test]
fn test_purge_removes_only_corrupted_shapes() {
    let (mut persistence, project_id) = setup_persistence_with_project();
    let valid_id: i64 = persistence.insert_shape(project_id, &circle()).unwrap();
    insert_raw_shape(&mut persistence, project_id, "[-112.07, 33.45]");

    let records: Vec<StoredShapeRecord> = persistence.list_shape_records().unwrap();
    assert_eq!(records.len(), 2);

    let corrupted: Vec<CorruptedShape> = find_corrupted_shapes(records.iter().map(|r| {
        (r.shape_id, r.shape_type.as_str(), r.coordinates_json.as_str())
    }));
    let ids: Vec<i64> = corrupted.iter().map(|c| c.shape_id).collect();
    let deleted: usize = persistence.delete_shapes(&ids).unwrap();

    assert_eq!(deleted, 1);
    let remaining: Vec<DrawnShapeData> = persistence.list_shapes(project_id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].shape_id, valid_id);
}

#[test]
fn test_delete_no_shapes() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.delete_shapes(&[]).unwrap(), 0);
}

#[test]
fn test_get_shape_ignores_undecodable_neighbours() {
    let (mut persistence, project_id) = setup_persistence_with_project();
    insert_raw_shape(&mut persistence, project_id, "not json");

    let shape_id: i64 = persistence.insert_shape(project_id, &circle()).unwrap();
    let shape: DrawnShapeData = persistence.get_shape(shape_id).unwrap();

    assert_eq!(shape.shape_id, shape_id);
    assert_eq!(shape.coordinates, json!([[-112.07, 33.45]]));
    assert!(persistence.list_shapes(project_id).is_err());
}

#[test]
fn test_get_missing_shape() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(
        persistence.get_shape(42).unwrap_err(),
        PersistenceError::ShapeNotFound(42)
    );
}
