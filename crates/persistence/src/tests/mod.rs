// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

mod project_tests;
mod shape_tests;

use crate::{NewProject, Persistence};
use citywise_domain::ProjectAttributes;

pub fn create_test_project() -> NewProject {
    NewProject {
        name: String::from("Backyard ADU"),
        jurisdiction: String::from("Phoenix"),
        project_type: String::from("ADDITION"),
        attributes: ProjectAttributes::new()
            .with("square_footage", 600)
            .with("structural_changes", "true"),
    }
}

/// Creates an in-memory store holding one project.
pub fn setup_persistence_with_project() -> (Persistence, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let project_id: i64 = persistence.create_project(&create_test_project()).unwrap();
    (persistence, project_id)
}
