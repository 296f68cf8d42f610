// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use citywise_domain::{
    JurisdictionRules, ProjectAttributes, RequirementRule, RuleCatalog, Trigger, TriggerOperator,
};

pub fn create_test_rule(name: &str, discipline: &str, triggers: Vec<Trigger>) -> RequirementRule {
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
            create_test_rule(
                "Structural Engineering",
                "Structural",
                vec![
                    Trigger::new("square_footage", TriggerOperator::GreaterThan, "500"),
                    Trigger::new("structural_changes", TriggerOperator::Equals, "true"),
                ],
            ),
            create_test_rule(
                "Foundation Plan",
                "Structural",
                vec![Trigger::new(
                    "square_footage",
                    TriggerOperator::GreaterThan,
                    "300",
                )],
            ),
            create_test_rule(
                "Plumbing Plan",
                "Plumbing",
                vec![Trigger::new("plumbing_work", TriggerOperator::Equals, "true")],
            ),
        ],
    }])
}

pub fn create_test_attributes() -> ProjectAttributes {
    ProjectAttributes::new()
        .with("square_footage", 600)
        .with("structural_changes", "true")
        .with("plumbing_work", true)
}
