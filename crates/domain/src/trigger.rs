// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::attributes::{AttributeValue, ProjectAttributes};
use serde::{Deserialize, Serialize};

/// Comparison operator of a requirement trigger.
///
/// Operators are authored as strings. Unknown strings are kept verbatim so
/// that a catalog with a newer operator still loads; such triggers never match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerOperator {
    /// Numeric `attribute > value`.
    GreaterThan,
    /// Numeric `attribute <= value`.
    LessThanOrEqual,
    /// String identity `attribute == value`.
    Equals,
    /// An operator this engine does not understand.
    Unrecognized(String),
}

impl TriggerOperator {
    /// Returns the authored string form of this operator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::Equals => "EQUALS",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for TriggerOperator {
    fn from(value: &str) -> Self {
        match value {
            "GREATER_THAN" => Self::GreaterThan,
            "LESS_THAN_OR_EQUAL" => Self::LessThanOrEqual,
            "EQUALS" => Self::Equals,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for TriggerOperator {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<TriggerOperator> for String {
    fn from(value: TriggerOperator) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for TriggerOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single comparison predicate deciding whether a rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// The project attribute to compare.
    #[serde(alias = "fieldName")]
    pub field_name: String,
    /// The comparison to apply.
    pub operator: TriggerOperator,
    /// The threshold or expected value, always authored as a string.
    pub value: String,
}

impl Trigger {
    /// Creates a new trigger.
    #[must_use]
    pub fn new(field_name: &str, operator: TriggerOperator, value: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            operator,
            value: value.to_string(),
        }
    }
}

/// Evaluates one trigger against a project's attributes.
///
/// Fail-closed: a missing attribute, an unrecognized operator, or an operand
/// that cannot be read as a number for a numeric operator all yield `false`.
/// An incomplete project therefore never over-triggers a requirement.
///
/// # Arguments
///
/// * `trigger` - The predicate to evaluate
/// * `attributes` - The project's attribute snapshot
///
/// # Returns
///
/// `true` only if the attribute is present and the comparison holds.
#[must_use]
pub fn evaluate_trigger(trigger: &Trigger, attributes: &ProjectAttributes) -> bool {
    let Some(actual) = attributes.get(&trigger.field_name) else {
        return false;
    };

    match &trigger.operator {
        TriggerOperator::GreaterThan => {
            compare_numeric(actual, &trigger.value).is_some_and(|(a, t)| a > t)
        }
        TriggerOperator::LessThanOrEqual => {
            compare_numeric(actual, &trigger.value).is_some_and(|(a, t)| a <= t)
        }
        TriggerOperator::Equals => actual.as_text() == trigger.value,
        TriggerOperator::Unrecognized(_) => false,
    }
}

fn compare_numeric(actual: &AttributeValue, threshold: &str) -> Option<(f64, f64)> {
    let threshold: f64 = AttributeValue::from(threshold).as_number()?;
    Some((actual.as_number()?, threshold))
}
