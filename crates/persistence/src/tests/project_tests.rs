// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_project, setup_persistence_with_project};
use crate::{Persistence, PersistenceError, ProjectData};
use citywise_domain::AttributeValue;

#[test]
fn test_create_and_get_project() {
    let (mut persistence, project_id) = setup_persistence_with_project();

    let project: ProjectData = persistence.get_project(project_id).unwrap();

    assert_eq!(project.project_id, project_id);
    assert_eq!(project.jurisdiction, "Phoenix");
    assert_eq!(project.project_type, "ADDITION");
    assert_eq!(
        project.attributes.get("square_footage"),
        Some(&AttributeValue::Number(600.0))
    );
    assert_eq!(
        project.attributes.get("structural_changes"),
        Some(&AttributeValue::Text(String::from("true")))
    );
    assert!(time::OffsetDateTime::parse(
        &project.created_at,
        &time::format_description::well_known::Rfc3339
    )
    .is_ok());
}

#[test]
fn test_project_ids_are_distinct() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let first: i64 = persistence.create_project(&create_test_project()).unwrap();
    let second: i64 = persistence.create_project(&create_test_project()).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_missing_project_is_not_found() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(
        persistence.get_project(42).unwrap_err(),
        PersistenceError::ProjectNotFound(42)
    );
}
