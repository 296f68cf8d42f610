// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Requirement rules and their resolution against a project.
//!
//! Rules are authored per jurisdiction and are read-only to this crate.
//! Resolution is a pure function of the catalog, the jurisdiction name, the
//! project type, and the project's attribute snapshot.

use crate::attributes::ProjectAttributes;
use crate::trigger::{Trigger, evaluate_trigger};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named permit/engineering requirement and the conditions that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRule {
    /// Short name of the requirement.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// The engineering discipline responsible (e.g. `Structural`).
    #[serde(default)]
    pub discipline: Option<String>,
    /// Project types this rule applies to.
    #[serde(alias = "projectTypes")]
    pub project_types: Vec<String>,
    /// Inactive rules are never selected.
    #[serde(alias = "isActive", default = "default_active")]
    pub is_active: bool,
    /// All triggers must pass for the rule to fire.
    #[serde(default)]
    pub triggers: Vec<Trigger>,
}

const fn default_active() -> bool {
    true
}

impl RequirementRule {
    /// Returns whether this rule is active and covers the project type.
    #[must_use]
    pub fn applies_to(&self, project_type: &str) -> bool {
        self.is_active && self.project_types.iter().any(|t| t == project_type)
    }

    /// Returns whether every trigger passes. An empty trigger list passes.
    #[must_use]
    pub fn is_satisfied_by(&self, attributes: &ProjectAttributes) -> bool {
        self.triggers
            .iter()
            .all(|trigger| evaluate_trigger(trigger, attributes))
    }
}

/// The ordered rule set of one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionRules {
    /// The municipality name, matched exactly.
    pub name: String,
    /// Rules in their stored order.
    #[serde(default)]
    pub rules: Vec<RequirementRule>,
}

/// Every jurisdiction's rules, as authored by operators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCatalog {
    /// Jurisdictions in authored order.
    #[serde(default)]
    pub jurisdictions: Vec<JurisdictionRules>,
}

impl RuleCatalog {
    /// Creates a catalog from jurisdiction rule sets.
    #[must_use]
    pub const fn new(jurisdictions: Vec<JurisdictionRules>) -> Self {
        Self { jurisdictions }
    }

    /// Finds a jurisdiction by exact name.
    #[must_use]
    pub fn jurisdiction(&self, name: &str) -> Option<&JurisdictionRules> {
        self.jurisdictions.iter().find(|j| j.name == name)
    }

    /// Returns the total number of rules across all jurisdictions.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.jurisdictions.iter().map(|j| j.rules.len()).sum()
    }
}

/// Resolves which requirement rules apply to a project.
///
/// Selects the active rules of `jurisdiction_name` that list `project_type`,
/// then keeps those whose triggers all pass. Stored order is preserved.
///
/// # Arguments
///
/// * `catalog` - The authored rule catalog
/// * `jurisdiction_name` - The jurisdiction, matched exactly
/// * `project_type` - The project type, matched exactly
/// * `attributes` - The project's attribute snapshot
///
/// # Returns
///
/// The matching rules. An unknown jurisdiction yields an empty list; absence
/// of rules is a valid outcome, not an error.
#[must_use]
pub fn resolve_requirements<'a>(
    catalog: &'a RuleCatalog,
    jurisdiction_name: &str,
    project_type: &str,
    attributes: &ProjectAttributes,
) -> Vec<&'a RequirementRule> {
    let Some(jurisdiction) = catalog.jurisdiction(jurisdiction_name) else {
        return Vec::new();
    };

    jurisdiction
        .rules
        .iter()
        .filter(|rule| rule.applies_to(project_type))
        .filter(|rule| rule.is_satisfied_by(attributes))
        .collect()
}

/// Returns the distinct disciplines of a set of rules, in first-seen order.
///
/// Rules without a discipline are skipped. Comparison is case-sensitive.
#[must_use]
pub fn distinct_disciplines<'a>(rules: &[&'a RequirementRule]) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    rules
        .iter()
        .copied()
        .filter_map(|rule| rule.discipline.as_deref())
        .filter(|discipline| seen.insert(discipline))
        .collect()
}
