// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::outcome::{RequirementPlan, RequirementTask};
use citywise_domain::{RequirementRule, distinct_disciplines};

/// Plans the discipline tasks for a set of matching rules.
///
/// A discipline is skipped when any existing task title contains it
/// (case-sensitive), which also covers manual tasks that name the
/// discipline. Storage enforces one task per discipline independently of
/// this check.
///
/// # Arguments
///
/// * `rules` - The matching rules, in stored order
/// * `existing_task_titles` - Titles of the project's current tasks
///
/// # Returns
///
/// A plan holding owned copies of the rules and the tasks to create.
#[must_use]
pub fn plan_requirement_tasks(
    rules: &[&RequirementRule],
    existing_task_titles: &[String],
) -> RequirementPlan {
    let tasks_to_create: Vec<RequirementTask> = distinct_disciplines(rules)
        .into_iter()
        .filter(|discipline| {
            !existing_task_titles
                .iter()
                .any(|title| title.contains(discipline))
        })
        .map(RequirementTask::for_discipline)
        .collect();

    RequirementPlan {
        rules: rules.iter().map(|rule| (*rule).clone()).collect(),
        tasks_to_create,
    }
}
