// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use citywise_domain::{
    EdgeLabel, ParcelBoundary, PhaseName, PhaseStatus, ProjectAttributes, Setbacks,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub project_id: i64,
    pub name: String,
    pub jurisdiction: String,
    pub project_type: String,
    pub attributes: ProjectAttributes,
    pub created_at: String,
}

/// Fields of a project to create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub jurisdiction: String,
    pub project_type: String,
    pub attributes: ProjectAttributes,
}

/// A stored parcel.
///
/// `setbacks` is present only once all four distances have been set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelData {
    pub parcel_id: i64,
    pub project_id: i64,
    pub apn: String,
    pub boundary: Option<ParcelBoundary>,
    pub setbacks: Option<Setbacks>,
    pub edge_labels: Vec<EdgeLabel>,
}

impl ParcelData {
    /// Returns the number of boundary edges, or 0 without a boundary.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary.as_ref().map_or(0, ParcelBoundary::edge_count)
    }
}

/// A stored drawn shape.
///
/// Coordinates are returned as stored; records written before validation
/// existed may not be in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnShapeData {
    pub shape_id: i64,
    pub project_id: i64,
    pub shape_type: String,
    pub coordinates: Value,
    pub area_sq_meters: f64,
    pub perimeter_meters: f64,
    pub properties: Value,
    pub created_at: String,
}

/// The raw coordinate column of a stored shape, used to detect corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredShapeRecord {
    pub shape_id: i64,
    pub shape_type: String,
    pub coordinates_json: String,
}

/// A stored roadmap with its phases in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapData {
    pub roadmap_id: i64,
    pub project_id: i64,
    pub project_type: String,
    pub created_at: String,
    pub phases: Vec<RoadmapPhaseData>,
}

/// A stored roadmap phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhaseData {
    pub phase_id: i64,
    pub name: PhaseName,
    pub order: u8,
    pub status: PhaseStatus,
    pub estimated_duration: String,
    pub services: Vec<String>,
}

/// A stored project task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub task_id: i64,
    pub project_id: i64,
    pub title: String,
    pub discipline: Option<String>,
    pub status: String,
    pub created_at: String,
}
