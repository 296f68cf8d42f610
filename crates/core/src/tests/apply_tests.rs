// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_attributes, create_test_catalog};
use crate::{Command, CoreError, NormalizedShape, Outcome, apply};
use citywise_domain::{PhaseStatus, RuleCatalog, SetbackSide, ShapeType, ValidationError};
use serde_json::json;

#[test]
fn test_set_setbacks_accepts_setbacks_and_labels_together() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::SetParcelSetbacks {
        setbacks: json!({"front": 20, "rear": 15, "left": 5, "right": 5}),
        edge_labels: Some(json!([
            {"edgeIndex": 0, "label": "Front"},
            {"edgeIndex": 2, "label": "rear"}
        ])),
        boundary_edge_count: 4,
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    let Outcome::SetbacksAccepted {
        setbacks,
        edge_labels,
    } = result.unwrap()
    else {
        panic!("expected SetbacksAccepted");
    };
    assert_eq!(setbacks.side_left, 5.0);
    assert_eq!(edge_labels.len(), 2);
    assert_eq!(edge_labels[0].label, SetbackSide::Front);
}

#[test]
fn test_set_setbacks_rejects_negative_distance() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::SetParcelSetbacks {
        setbacks: json!({"front": 10, "rear": 10, "sideLeft": -1, "sideRight": 5}),
        edge_labels: None,
        boundary_edge_count: 4,
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    assert_eq!(
        result.unwrap_err(),
        CoreError::Validation(ValidationError::Negative {
            field: "sideLeft",
            value: "-1".to_string(),
        })
    );
}

#[test]
fn test_set_setbacks_rejects_whole_update_on_bad_label() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::SetParcelSetbacks {
        setbacks: json!({"front": 20, "rear": 15, "sideLeft": 5, "sideRight": 5}),
        edge_labels: Some(json!([
            {"edgeIndex": 0, "label": "front"},
            {"edgeIndex": 5, "label": "rear"}
        ])),
        boundary_edge_count: 4,
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    assert!(matches!(
        result,
        Err(CoreError::Validation(
            ValidationError::EdgeIndexOutOfRange { .. }
        ))
    ));
}

#[test]
fn test_labels_without_boundary_are_out_of_range() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::SetParcelSetbacks {
        setbacks: json!({"front": 20, "rear": 15, "sideLeft": 5, "sideRight": 5}),
        edge_labels: Some(json!([{"edgeIndex": 0, "label": "front"}])),
        boundary_edge_count: 0,
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    assert!(result.is_err());
}

#[test]
fn test_record_shape_normalizes_and_measures() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::RecordShape {
        shape_type: String::from("Circle"),
        coordinates: Some(json!([[-112.07, 33.45]])),
        properties: json!({"radius": 3.0, "color": "red"}),
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    let Outcome::ShapeAccepted(shape) = result.unwrap() else {
        panic!("expected ShapeAccepted");
    };
    let shape: NormalizedShape = shape;
    assert_eq!(shape.shape_type, ShapeType::Circle);
    assert_eq!(shape.coordinates, vec![[-112.07, 33.45]]);
    assert!(shape.measurements.area_sq_meters > 28.0);
    assert_eq!(shape.properties["color"], "red");
}

#[test]
fn test_record_shape_defaults_properties_to_object() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::RecordShape {
        shape_type: String::from("point"),
        coordinates: Some(json!([[-112.07, 33.45]])),
        properties: serde_json::Value::Null,
    };

    let Outcome::ShapeAccepted(shape) = apply(&catalog, command).unwrap() else {
        panic!("expected ShapeAccepted");
    };
    assert_eq!(shape.properties, json!({}));
}

#[test]
fn test_record_shape_rejects_flat_circle() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::RecordShape {
        shape_type: String::from("circle"),
        coordinates: Some(json!([-112.07, 33.45])),
        properties: json!({"radius": 3.0}),
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    assert!(matches!(
        result,
        Err(CoreError::Validation(ValidationError::LegacyFlatFormat { .. }))
    ));
}

#[test]
fn test_record_shape_rejects_unmeasurable_polygon() {
    let catalog: RuleCatalog = create_test_catalog();
    // latitude 200 is outside WGS84 and yields a NaN geodesic area
    let command: Command = Command::RecordShape {
        shape_type: String::from("polygon"),
        coordinates: Some(json!([[0.0, 0.0], [0.0, 200.0], [1.0, 1.0]])),
        properties: json!({}),
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    assert!(matches!(
        result,
        Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
    ));
}

#[test]
fn test_record_shape_rejects_infinite_circle() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::RecordShape {
        shape_type: String::from("circle"),
        coordinates: Some(json!([[-112.07, 33.45]])),
        properties: json!({"radius": 1e308}),
    };

    let result: Result<Outcome, CoreError> = apply(&catalog, command);

    assert!(matches!(
        result,
        Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
    ));
}

#[test]
fn test_create_roadmap_plans_six_phases() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::CreateRoadmap {
        project_type: String::from("POOL"),
    };

    let Outcome::RoadmapPlanned {
        project_type,
        phases,
    } = apply(&catalog, command).unwrap()
    else {
        panic!("expected RoadmapPlanned");
    };
    assert_eq!(project_type, "POOL");
    assert_eq!(phases.len(), 6);
    assert_eq!(phases[0].status, PhaseStatus::InProgress);
}

#[test]
fn test_resolve_requirements_plans_one_task_per_discipline() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::ResolveRequirements {
        jurisdiction: String::from("Phoenix"),
        project_type: String::from("ADDITION"),
        attributes: create_test_attributes(),
        existing_task_titles: vec![],
    };

    let Outcome::RequirementsResolved(plan) = apply(&catalog, command).unwrap() else {
        panic!("expected RequirementsResolved");
    };
    assert_eq!(plan.rules.len(), 3);
    let titles: Vec<&str> = plan
        .tasks_to_create
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Structural review", "Plumbing review"]);
}

#[test]
fn test_resolve_requirements_unknown_jurisdiction_is_empty() {
    let catalog: RuleCatalog = create_test_catalog();
    let command: Command = Command::ResolveRequirements {
        jurisdiction: String::from("Nowhereville"),
        project_type: String::from("ADDITION"),
        attributes: create_test_attributes(),
        existing_task_titles: vec![],
    };

    let Outcome::RequirementsResolved(plan) = apply(&catalog, command).unwrap() else {
        panic!("expected RequirementsResolved");
    };
    assert!(plan.rules.is_empty());
    assert!(plan.tasks_to_create.is_empty());
}

#[test]
fn test_command_names() {
    let command: Command = Command::CreateRoadmap {
        project_type: String::from("ADU"),
    };
    assert_eq!(command.name(), "CreateRoadmap");
}
