// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use citywise_domain::{
    JurisdictionRules, ProjectAttributes, RequirementRule, RuleCatalog, Trigger, TriggerOperator,
};
use citywise_persistence::Persistence;

use crate::{CreateProjectRequest, create_project};

fn addition_rule(name: &str, discipline: &str, triggers: Vec<Trigger>) -> RequirementRule {
    RequirementRule {
        name: name.to_string(),
        description: format!("{name} required"),
        discipline: Some(discipline.to_string()),
        project_types: vec![String::from("ADDITION")],
        is_active: true,
        triggers,
    }
}

pub fn create_test_catalog() -> RuleCatalog {
    RuleCatalog::new(vec![JurisdictionRules {
        name: String::from("Phoenix"),
        rules: vec![
            addition_rule(
                "Structural Engineering",
                "Structural",
                vec![
                    Trigger::new("square_footage", TriggerOperator::GreaterThan, "500"),
                    Trigger::new("structural_changes", TriggerOperator::Equals, "true"),
                ],
            ),
            addition_rule(
                "Foundation Plan",
                "Structural",
                vec![Trigger::new(
                    "square_footage",
                    TriggerOperator::GreaterThan,
                    "300",
                )],
            ),
            addition_rule(
                "Plumbing Plan",
                "Plumbing",
                vec![Trigger::new("plumbing_work", TriggerOperator::Equals, "true")],
            ),
        ],
    }])
}

pub fn create_project_request(jurisdiction: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        name: String::from("Garage conversion"),
        jurisdiction: jurisdiction.to_string(),
        project_type: String::from("ADDITION"),
        attributes: ProjectAttributes::new()
            .with("square_footage", 600)
            .with("structural_changes", "true"),
    }
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates an in-memory store holding one Phoenix addition project.
pub fn setup_with_project() -> (Persistence, i64) {
    let mut persistence: Persistence = create_test_persistence();
    let project_id: i64 = create_project(&mut persistence, create_project_request("Phoenix"))
        .unwrap()
        .project_id;
    (persistence, project_id)
}
