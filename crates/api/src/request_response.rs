// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Bodies use camelCase field names on the wire.

use citywise_domain::{EdgeLabel, Position, ProjectAttributes, Setbacks};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// API request to create a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Display name of the project.
    pub name: String,
    /// The municipality whose rules apply.
    pub jurisdiction: String,
    /// The project type (e.g. `ADDITION`).
    pub project_type: String,
    /// Attribute snapshot used for requirement resolution.
    #[serde(default)]
    pub attributes: ProjectAttributes,
}

/// API response for a successful project creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResponse {
    /// The canonical project identifier.
    pub project_id: i64,
    /// A success message.
    pub message: String,
}

/// A stored project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// The canonical project identifier.
    pub project_id: i64,
    /// Display name of the project.
    pub name: String,
    /// The municipality whose rules apply.
    pub jurisdiction: String,
    /// The project type.
    pub project_type: String,
    /// Attribute snapshot.
    pub attributes: ProjectAttributes,
    /// Creation time (RFC 3339).
    pub created_at: String,
}

/// API request to create a parcel within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParcelRequest {
    /// Assessor's parcel number.
    pub apn: String,
    /// Boundary polygon as GeoJSON geometry, polygon coordinates or a ring.
    #[serde(default)]
    pub boundary: Option<Value>,
}

/// API response for a successful parcel creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParcelResponse {
    /// The canonical parcel identifier.
    pub parcel_id: i64,
    /// The owning project.
    pub project_id: i64,
    /// Number of boundary edges available for labeling.
    pub edge_count: usize,
    /// A success message.
    pub message: String,
}

/// A stored parcel with its setbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelInfo {
    /// The canonical parcel identifier.
    pub parcel_id: i64,
    /// The owning project.
    pub project_id: i64,
    /// Assessor's parcel number.
    pub apn: String,
    /// The boundary ring, if known.
    pub boundary: Option<Vec<Position>>,
    /// Number of boundary edges.
    pub edge_count: usize,
    /// Recorded setbacks, if any.
    pub setbacks: Option<Setbacks>,
    /// Recorded edge labels.
    pub edge_labels: Vec<EdgeLabel>,
}

/// API request to set a parcel's setbacks.
///
/// Both payloads are kept raw so that validation reports field-level errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSetbacksRequest {
    /// Object with `front`, `rear`, `sideLeft` and `sideRight`.
    pub setbacks: Value,
    /// Optional list of `{edgeIndex, label}` objects.
    #[serde(default)]
    pub edge_labels: Option<Value>,
}

/// API response for accepted setbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSetbacksResponse {
    /// The updated parcel.
    pub parcel_id: i64,
    /// The stored setbacks.
    pub setbacks: Setbacks,
    /// The stored edge labels.
    pub edge_labels: Vec<EdgeLabel>,
    /// A success message.
    pub message: String,
}

/// API request to record a drawn shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShapeRequest {
    /// The drawing tool (`point`, `polygon`, `circle`, ...).
    #[serde(alias = "type")]
    pub shape_type: String,
    /// Raw coordinate payload.
    #[serde(default)]
    pub coordinates: Option<Value>,
    /// Free-form properties such as `radius`.
    #[serde(default)]
    pub properties: Value,
}

/// A stored drawn shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeInfo {
    /// The canonical shape identifier.
    pub shape_id: i64,
    /// The owning project.
    pub project_id: i64,
    /// The kind of shape.
    pub shape_type: String,
    /// Canonical coordinates.
    pub coordinates: Value,
    /// Enclosed area in square meters.
    pub area_sq_meters: f64,
    /// Boundary length in meters.
    pub perimeter_meters: f64,
    /// Free-form properties.
    pub properties: Value,
    /// Creation time (RFC 3339).
    pub created_at: String,
}

/// API response listing a project's shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShapesResponse {
    /// The project.
    pub project_id: i64,
    /// Shapes in creation order.
    pub shapes: Vec<ShapeInfo>,
}

/// API response for a deleted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteShapeResponse {
    /// The deleted shape.
    pub shape_id: i64,
    /// A success message.
    pub message: String,
}

/// One shape removed by a purge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgedShapeInfo {
    /// The deleted shape.
    pub shape_id: i64,
    /// Why the stored coordinates were rejected.
    pub reason: String,
}

/// API response for a corrupted-shape purge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeCorruptedShapesResponse {
    /// Number of stored shapes examined.
    pub scanned: usize,
    /// Shapes that were deleted.
    pub purged: Vec<PurgedShapeInfo>,
    /// A summary message.
    pub message: String,
}

/// One roadmap phase, planned or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseInfo {
    /// Storage identifier; absent for template previews.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phase_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// 0-based position.
    pub order: u8,
    /// `waiting`, `in_progress` or `completed`.
    pub status: String,
    /// Duration estimate.
    pub estimated_duration: String,
    /// Services delivered in the phase.
    pub services: Vec<String>,
}

/// API response previewing the phases for a project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapTemplateResponse {
    /// The requested project type.
    pub project_type: String,
    /// The six phases in order.
    pub phases: Vec<PhaseInfo>,
}

/// A stored roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapInfo {
    /// The canonical roadmap identifier.
    pub roadmap_id: i64,
    /// The owning project.
    pub project_id: i64,
    /// Project type the roadmap was generated for.
    pub project_type: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Phases in order.
    pub phases: Vec<PhaseInfo>,
}

/// API request to preview requirements without a stored project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequirementsRequest {
    /// The municipality whose rules apply.
    pub jurisdiction: String,
    /// The project type.
    pub project_type: String,
    /// Attribute snapshot.
    #[serde(default)]
    pub attributes: ProjectAttributes,
}

/// A requirement that applies to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementInfo {
    /// Short name of the requirement.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Responsible discipline, if any.
    pub discipline: Option<String>,
}

/// API response for a requirements preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequirementsResponse {
    /// The jurisdiction evaluated.
    pub jurisdiction: String,
    /// The project type evaluated.
    pub project_type: String,
    /// Matching requirements in stored order.
    pub requirements: Vec<RequirementInfo>,
    /// Distinct disciplines in first-occurrence order.
    pub disciplines: Vec<String>,
}

/// A project task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    /// The canonical task identifier.
    pub task_id: i64,
    /// The owning project.
    pub project_id: i64,
    /// Task title.
    pub title: String,
    /// Discipline for requirement-derived tasks.
    pub discipline: Option<String>,
    /// Task status.
    pub status: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
}

/// API response for requirement evaluation of a stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequirementsResponse {
    /// The project.
    pub project_id: i64,
    /// Matching requirements in stored order.
    pub requirements: Vec<RequirementInfo>,
    /// Tasks created by this evaluation; empty when all already existed.
    pub tasks_created: Vec<TaskInfo>,
    /// A summary message.
    pub message: String,
}

/// API request to create a manual task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
}

/// API response listing a project's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksResponse {
    /// The project.
    pub project_id: i64,
    /// Tasks in creation order.
    pub tasks: Vec<TaskInfo>,
}
