// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AttributeValue, ProjectAttributes, Trigger, TriggerOperator, evaluate_trigger};

fn square_footage(value: impl Into<AttributeValue>) -> ProjectAttributes {
    ProjectAttributes::new().with("square_footage", value)
}

#[test]
fn test_greater_than_passes_above_threshold() {
    let trigger: Trigger = Trigger::new("square_footage", TriggerOperator::GreaterThan, "500");
    assert!(evaluate_trigger(&trigger, &square_footage(600)));
}

#[test]
fn test_greater_than_fails_at_threshold() {
    let trigger: Trigger = Trigger::new("square_footage", TriggerOperator::GreaterThan, "500");
    assert!(!evaluate_trigger(&trigger, &square_footage(500)));
}

#[test]
fn test_greater_than_reads_numeric_text() {
    let trigger: Trigger = Trigger::new("square_footage", TriggerOperator::GreaterThan, "500");
    assert!(evaluate_trigger(&trigger, &square_footage(" 750.5 ")));
}

#[test]
fn test_greater_than_is_monotonic_in_attribute_value() {
    let trigger: Trigger = Trigger::new("square_footage", TriggerOperator::GreaterThan, "500");
    let mut previously_passed: bool = false;
    for value in [-10, 0, 250, 499, 500, 501, 600, 10_000] {
        let passed: bool = evaluate_trigger(&trigger, &square_footage(value));
        assert!(
            !previously_passed || passed,
            "increasing the value to {value} turned a pass into a fail"
        );
        previously_passed = passed;
    }
    assert!(previously_passed);
}

#[test]
fn test_less_than_or_equal_includes_threshold() {
    let trigger: Trigger = Trigger::new("height", TriggerOperator::LessThanOrEqual, "16");
    let at: ProjectAttributes = ProjectAttributes::new().with("height", 16);
    let above: ProjectAttributes = ProjectAttributes::new().with("height", 16.5);
    assert!(evaluate_trigger(&trigger, &at));
    assert!(!evaluate_trigger(&trigger, &above));
}

#[test]
fn test_equals_compares_strings() {
    let trigger: Trigger = Trigger::new("structural_changes", TriggerOperator::Equals, "true");
    let text: ProjectAttributes = ProjectAttributes::new().with("structural_changes", "true");
    let boolean: ProjectAttributes = ProjectAttributes::new().with("structural_changes", true);
    let other: ProjectAttributes = ProjectAttributes::new().with("structural_changes", "TRUE");
    assert!(evaluate_trigger(&trigger, &text));
    assert!(evaluate_trigger(&trigger, &boolean));
    assert!(!evaluate_trigger(&trigger, &other));
}

#[test]
fn test_equals_is_not_numeric() {
    let trigger: Trigger = Trigger::new("stories", TriggerOperator::Equals, "2.0");
    assert!(!evaluate_trigger(
        &trigger,
        &ProjectAttributes::new().with("stories", 2)
    ));

    let trigger: Trigger = Trigger::new("stories", TriggerOperator::Equals, "2");
    assert!(evaluate_trigger(
        &trigger,
        &ProjectAttributes::new().with("stories", 2)
    ));
}

#[test]
fn test_missing_field_never_matches() {
    for operator in [
        TriggerOperator::GreaterThan,
        TriggerOperator::LessThanOrEqual,
        TriggerOperator::Equals,
    ] {
        let trigger: Trigger = Trigger::new("plumbing_work", operator, "true");
        assert!(!evaluate_trigger(&trigger, &ProjectAttributes::new()));
    }
}

#[test]
fn test_unrecognized_operator_never_matches() {
    let trigger: Trigger = Trigger::new(
        "square_footage",
        TriggerOperator::from("GREATER_THAN_OR_EQUAL"),
        "500",
    );
    assert!(matches!(trigger.operator, TriggerOperator::Unrecognized(_)));
    assert!(!evaluate_trigger(&trigger, &square_footage(900)));
}

#[test]
fn test_numeric_operator_with_non_numeric_operand_fails_closed() {
    let trigger: Trigger = Trigger::new("square_footage", TriggerOperator::GreaterThan, "500");
    assert!(!evaluate_trigger(&trigger, &square_footage("large")));
    assert!(!evaluate_trigger(&trigger, &square_footage(true)));

    let bad_threshold: Trigger =
        Trigger::new("square_footage", TriggerOperator::GreaterThan, "n/a");
    assert!(!evaluate_trigger(&bad_threshold, &square_footage(900)));
}

#[test]
fn test_trigger_deserializes_authored_form() {
    let trigger: Trigger = serde_json::from_str(
        r#"{"fieldName": "square_footage", "operator": "GREATER_THAN", "value": "500"}"#,
    )
    .unwrap();
    assert_eq!(trigger.field_name, "square_footage");
    assert_eq!(trigger.operator, TriggerOperator::GreaterThan);

    let serialized: serde_json::Value = serde_json::to_value(&trigger).unwrap();
    assert_eq!(serialized["operator"], "GREATER_THAN");
}

#[test]
fn test_attribute_text_forms() {
    assert_eq!(AttributeValue::from(600).as_text(), "600");
    assert_eq!(AttributeValue::from(1.5).as_text(), "1.5");
    assert_eq!(AttributeValue::from(false).as_text(), "false");
    assert_eq!(AttributeValue::from("x").as_number(), None);
}

#[test]
fn test_attributes_deserialize_mixed_json() {
    let attributes: ProjectAttributes = serde_json::from_str(
        r#"{"square_footage": 600, "structural_changes": "true", "plumbing_work": true}"#,
    )
    .unwrap();
    assert_eq!(attributes.len(), 3);
    assert_eq!(
        attributes.get("square_footage"),
        Some(&AttributeValue::Number(600.0))
    );
    assert_eq!(
        attributes.get("plumbing_work"),
        Some(&AttributeValue::Bool(true))
    );
}
