// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use citywise_domain::ProjectAttributes;
use serde_json::Value;

/// A command represents user intent as data only.
///
/// Raw payloads are carried as submitted; `apply` is the only place they are
/// validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace a parcel's setbacks and edge labels.
    SetParcelSetbacks {
        /// The submitted setback object.
        setbacks: Value,
        /// The submitted edge labels, if any.
        edge_labels: Option<Value>,
        /// Number of edges in the parcel's boundary ring; 0 without a boundary.
        boundary_edge_count: usize,
    },
    /// Record a user-drawn shape on a project map.
    RecordShape {
        /// The drawing tool that produced the shape.
        shape_type: String,
        /// The submitted coordinates.
        coordinates: Option<Value>,
        /// Free-form shape properties.
        properties: Value,
    },
    /// Plan the permit roadmap of a project.
    CreateRoadmap {
        /// The project type.
        project_type: String,
    },
    /// Resolve the requirement rules that apply to a project.
    ResolveRequirements {
        /// The project's jurisdiction.
        jurisdiction: String,
        /// The project type.
        project_type: String,
        /// The project's attribute snapshot.
        attributes: ProjectAttributes,
        /// Titles of the tasks the project already has.
        existing_task_titles: Vec<String>,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetParcelSetbacks { .. } => "SetParcelSetbacks",
            Self::RecordShape { .. } => "RecordShape",
            Self::CreateRoadmap { .. } => "CreateRoadmap",
            Self::ResolveRequirements { .. } => "ResolveRequirements",
        }
    }
}
