// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use citywise_domain::{
    EdgeLabel, PhaseTemplate, Position, RequirementRule, Setbacks, ShapeMeasurements, ShapeType,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A drawn shape that passed normalization, ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedShape {
    /// The kind of shape.
    pub shape_type: ShapeType,
    /// Canonical coordinates.
    pub coordinates: Vec<Position>,
    /// Derived area and perimeter.
    pub measurements: ShapeMeasurements,
    /// Free-form properties; always a JSON object.
    pub properties: Value,
}

/// A task to create for a discipline required by the project's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementTask {
    /// Task title, `"<discipline> review"`.
    pub title: String,
    /// The discipline the task covers.
    pub discipline: String,
}

impl RequirementTask {
    /// Creates the review task for a discipline.
    #[must_use]
    pub fn for_discipline(discipline: &str) -> Self {
        Self {
            title: format!("{discipline} review"),
            discipline: discipline.to_string(),
        }
    }
}

/// The rules that apply to a project and the tasks they call for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementPlan {
    /// Matching rules in stored order.
    pub rules: Vec<RequirementRule>,
    /// Discipline tasks the project does not cover yet.
    pub tasks_to_create: Vec<RequirementTask>,
}

/// The validated result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Setbacks and edge labels to store on the parcel, as one update.
    SetbacksAccepted {
        /// Canonical setbacks.
        setbacks: Setbacks,
        /// Lowercased labels in submission order.
        edge_labels: Vec<EdgeLabel>,
    },
    /// A shape to store.
    ShapeAccepted(NormalizedShape),
    /// The phases of a new roadmap.
    RoadmapPlanned {
        /// The project type the roadmap was generated for.
        project_type: String,
        /// All six phases in order.
        phases: [PhaseTemplate; 6],
    },
    /// Resolved requirements.
    RequirementsResolved(RequirementPlan),
}
