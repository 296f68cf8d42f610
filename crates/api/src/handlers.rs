// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler validates through the command layer before anything is
//! written, so a rejected request leaves storage untouched.

use citywise::{Command, CorruptedShape, Outcome, RequirementPlan, apply, find_corrupted_shapes};
use citywise_domain::{
    ParcelBoundary, PhaseTemplate, RequirementRule, RuleCatalog, distinct_disciplines,
    generate_roadmap_template, resolve_requirements,
};
use citywise_persistence::{
    DrawnShapeData, NewProject, ParcelData, Persistence, ProjectData, RoadmapData, RoadmapPhaseData,
    StoredShapeRecord, TaskData,
};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error, translate_persistence_error};
use crate::request_response::{
    CreateParcelRequest, CreateParcelResponse, CreateProjectRequest, CreateProjectResponse,
    CreateShapeRequest, CreateTaskRequest, DeleteShapeResponse, EvaluateRequirementsResponse,
    ListShapesResponse, ListTasksResponse, ParcelInfo, PhaseInfo, PreviewRequirementsRequest,
    PreviewRequirementsResponse, ProjectInfo, PurgeCorruptedShapesResponse, PurgedShapeInfo,
    RequirementInfo, RoadmapInfo, RoadmapTemplateResponse, SetSetbacksRequest, SetSetbacksResponse,
    ShapeInfo, TaskInfo,
};

/// Catalog for commands that never consult requirement rules.
static NO_RULES: RuleCatalog = RuleCatalog::new(Vec::new());

/// Rejects blank text fields.
fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{field}' must not be empty"),
        });
    }
    Ok(())
}

/// Reports an outcome that does not belong to the applied command.
fn unexpected_outcome(command: &str) -> ApiError {
    ApiError::Internal {
        message: format!("Command '{command}' produced an unexpected outcome"),
    }
}

fn project_to_info(project: ProjectData) -> ProjectInfo {
    ProjectInfo {
        project_id: project.project_id,
        name: project.name,
        jurisdiction: project.jurisdiction,
        project_type: project.project_type,
        attributes: project.attributes,
        created_at: project.created_at,
    }
}

fn parcel_to_info(parcel: ParcelData) -> ParcelInfo {
    let edge_count: usize = parcel.boundary_edge_count();
    ParcelInfo {
        parcel_id: parcel.parcel_id,
        project_id: parcel.project_id,
        apn: parcel.apn,
        boundary: parcel.boundary.map(|b| b.positions().to_vec()),
        edge_count,
        setbacks: parcel.setbacks,
        edge_labels: parcel.edge_labels,
    }
}

fn shape_to_info(shape: DrawnShapeData) -> ShapeInfo {
    ShapeInfo {
        shape_id: shape.shape_id,
        project_id: shape.project_id,
        shape_type: shape.shape_type,
        coordinates: shape.coordinates,
        area_sq_meters: shape.area_sq_meters,
        perimeter_meters: shape.perimeter_meters,
        properties: shape.properties,
        created_at: shape.created_at,
    }
}

fn template_to_info(phase: PhaseTemplate) -> PhaseInfo {
    PhaseInfo {
        phase_id: None,
        name: phase.name.to_string(),
        order: phase.order,
        status: phase.status.to_string(),
        estimated_duration: phase.estimated_duration,
        services: phase.services,
    }
}

fn phase_to_info(phase: RoadmapPhaseData) -> PhaseInfo {
    PhaseInfo {
        phase_id: Some(phase.phase_id),
        name: phase.name.to_string(),
        order: phase.order,
        status: phase.status.to_string(),
        estimated_duration: phase.estimated_duration,
        services: phase.services,
    }
}

fn roadmap_to_info(roadmap: RoadmapData) -> RoadmapInfo {
    RoadmapInfo {
        roadmap_id: roadmap.roadmap_id,
        project_id: roadmap.project_id,
        project_type: roadmap.project_type,
        created_at: roadmap.created_at,
        phases: roadmap.phases.into_iter().map(phase_to_info).collect(),
    }
}

fn rule_to_info(rule: &RequirementRule) -> RequirementInfo {
    RequirementInfo {
        name: rule.name.clone(),
        description: rule.description.clone(),
        discipline: rule.discipline.clone(),
    }
}

fn task_to_info(task: TaskData) -> TaskInfo {
    TaskInfo {
        task_id: task.task_id,
        project_id: task.project_id,
        title: task.title,
        discipline: task.discipline,
        status: task.status,
        created_at: task.created_at,
    }
}

/// Creates a project.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The project to create
///
/// # Errors
///
/// Returns an error if:
/// - The name, jurisdiction or project type is blank
/// - The database write fails
pub fn create_project(
    persistence: &mut Persistence,
    request: CreateProjectRequest,
) -> Result<CreateProjectResponse, ApiError> {
    require_text("name", &request.name)?;
    require_text("jurisdiction", &request.jurisdiction)?;
    require_text("projectType", &request.project_type)?;

    let new_project: NewProject = NewProject {
        name: request.name,
        jurisdiction: request.jurisdiction,
        project_type: request.project_type,
        attributes: request.attributes,
    };
    let project_id: i64 = persistence
        .create_project(&new_project)
        .map_err(translate_persistence_error)?;

    Ok(CreateProjectResponse {
        project_id,
        message: format!("Created project '{}'", new_project.name),
    })
}

/// Retrieves a project.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the project does not exist.
pub fn get_project(
    persistence: &mut Persistence,
    project_id: i64,
) -> Result<ProjectInfo, ApiError> {
    persistence
        .get_project(project_id)
        .map(project_to_info)
        .map_err(translate_persistence_error)
}

/// Creates a parcel within a project.
///
/// The boundary is optional. Without one the parcel has no edges, so any
/// edge label later submitted for it is out of range.
///
/// # Errors
///
/// Returns an error if:
/// - The APN is blank
/// - The boundary cannot be read as a polygon ring
/// - The project does not exist
pub fn create_parcel(
    persistence: &mut Persistence,
    project_id: i64,
    request: &CreateParcelRequest,
) -> Result<CreateParcelResponse, ApiError> {
    require_text("apn", &request.apn)?;

    let boundary: Option<ParcelBoundary> = request
        .boundary
        .as_ref()
        .filter(|raw| !raw.is_null())
        .map(ParcelBoundary::from_json)
        .transpose()
        .map_err(|err| ApiError::InvalidInput {
            field: String::from("boundary"),
            message: err.to_string(),
        })?;

    let parcel_id: i64 = persistence
        .create_parcel(project_id, &request.apn, boundary.as_ref())
        .map_err(translate_persistence_error)?;

    Ok(CreateParcelResponse {
        parcel_id,
        project_id,
        edge_count: boundary.as_ref().map_or(0, ParcelBoundary::edge_count),
        message: format!("Created parcel {}", request.apn),
    })
}

/// Retrieves a parcel with its setbacks and edge labels.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the parcel does not exist.
pub fn get_parcel(persistence: &mut Persistence, parcel_id: i64) -> Result<ParcelInfo, ApiError> {
    persistence
        .get_parcel(parcel_id)
        .map(parcel_to_info)
        .map_err(translate_persistence_error)
}

/// Validates and stores a parcel's setbacks and edge labels.
///
/// Setbacks and labels are validated together and written in one statement;
/// if either is rejected nothing is stored.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `parcel_id` - The parcel to update
/// * `request` - Raw setbacks and optional edge labels
///
/// # Errors
///
/// Returns an error if:
/// - The parcel does not exist
/// - A setback is missing, non-numeric or negative
/// - An edge label is malformed or outside the parcel boundary
pub fn set_parcel_setbacks(
    persistence: &mut Persistence,
    parcel_id: i64,
    request: SetSetbacksRequest,
) -> Result<SetSetbacksResponse, ApiError> {
    let parcel: ParcelData = persistence
        .get_parcel(parcel_id)
        .map_err(translate_persistence_error)?;

    let command: Command = Command::SetParcelSetbacks {
        setbacks: request.setbacks,
        edge_labels: request.edge_labels,
        boundary_edge_count: parcel.boundary_edge_count(),
    };
    let Outcome::SetbacksAccepted {
        setbacks,
        edge_labels,
    } = apply(&NO_RULES, command).map_err(translate_core_error)?
    else {
        return Err(unexpected_outcome("set_parcel_setbacks"));
    };

    persistence
        .update_parcel_setbacks(parcel_id, &setbacks, &edge_labels)
        .map_err(translate_persistence_error)?;

    let message: String = format!(
        "Stored setbacks with {} edge label(s) for parcel {parcel_id}",
        edge_labels.len()
    );
    Ok(SetSetbacksResponse {
        parcel_id,
        setbacks,
        edge_labels,
        message,
    })
}

/// Normalizes, measures and stores a drawn shape.
///
/// Legacy flat coordinates are rejected, never repaired.
///
/// # Errors
///
/// Returns an error if:
/// - The project does not exist
/// - The coordinates are missing or malformed
pub fn create_shape(
    persistence: &mut Persistence,
    project_id: i64,
    request: CreateShapeRequest,
) -> Result<ShapeInfo, ApiError> {
    persistence
        .get_project(project_id)
        .map_err(translate_persistence_error)?;

    let command: Command = Command::RecordShape {
        shape_type: request.shape_type,
        coordinates: request.coordinates,
        properties: request.properties,
    };
    let Outcome::ShapeAccepted(shape) = apply(&NO_RULES, command).map_err(translate_core_error)?
    else {
        return Err(unexpected_outcome("create_shape"));
    };

    let shape_id: i64 = persistence
        .insert_shape(project_id, &shape)
        .map_err(translate_persistence_error)?;

    debug!(shape_id, shape_type = %shape.shape_type, "Shape recorded");

    persistence
        .get_shape(shape_id)
        .map(shape_to_info)
        .map_err(translate_persistence_error)
}

/// Lists the shapes of a project.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the project does not exist.
pub fn list_shapes(
    persistence: &mut Persistence,
    project_id: i64,
) -> Result<ListShapesResponse, ApiError> {
    let shapes: Vec<DrawnShapeData> = persistence
        .list_shapes(project_id)
        .map_err(translate_persistence_error)?;

    Ok(ListShapesResponse {
        project_id,
        shapes: shapes.into_iter().map(shape_to_info).collect(),
    })
}

/// Deletes a shape.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the shape does not exist.
pub fn delete_shape(
    persistence: &mut Persistence,
    shape_id: i64,
) -> Result<DeleteShapeResponse, ApiError> {
    persistence
        .delete_shape(shape_id)
        .map_err(translate_persistence_error)?;

    Ok(DeleteShapeResponse {
        shape_id,
        message: format!("Deleted shape {shape_id}"),
    })
}

/// Deletes every stored shape whose coordinates fail normalization.
///
/// Detection uses the same rules as shape creation, so a legacy flat pair is
/// purged rather than rewritten.
///
/// # Errors
///
/// Returns an error if the shapes cannot be read or deleted.
pub fn purge_corrupted_shapes(
    persistence: &mut Persistence,
) -> Result<PurgeCorruptedShapesResponse, ApiError> {
    let records: Vec<StoredShapeRecord> = persistence
        .list_shape_records()
        .map_err(translate_persistence_error)?;

    let corrupted: Vec<CorruptedShape> = find_corrupted_shapes(records.iter().map(|record| {
        (
            record.shape_id,
            record.shape_type.as_str(),
            record.coordinates_json.as_str(),
        )
    }));

    for shape in &corrupted {
        warn!(shape_id = shape.shape_id, reason = %shape.reason, "Purging corrupted shape");
    }

    let shape_ids: Vec<i64> = corrupted.iter().map(|shape| shape.shape_id).collect();
    let deleted: usize = persistence
        .delete_shapes(&shape_ids)
        .map_err(translate_persistence_error)?;

    info!(scanned = records.len(), deleted, "Corrupted shape purge complete");

    Ok(PurgeCorruptedShapesResponse {
        scanned: records.len(),
        purged: corrupted
            .into_iter()
            .map(|shape| PurgedShapeInfo {
                shape_id: shape.shape_id,
                reason: shape.reason.to_string(),
            })
            .collect(),
        message: format!("Purged {deleted} of {} shape(s)", records.len()),
    })
}

/// Previews the six roadmap phases for a project type.
///
/// Never fails; unknown project types receive the ADU content.
#[must_use]
pub fn preview_roadmap_template(project_type: &str) -> RoadmapTemplateResponse {
    let phases: [PhaseTemplate; 6] = generate_roadmap_template(project_type);
    RoadmapTemplateResponse {
        project_type: project_type.to_string(),
        phases: phases.into_iter().map(template_to_info).collect(),
    }
}

/// Creates a project's roadmap from its project type.
///
/// The roadmap and all six phases are stored in one transaction.
///
/// # Errors
///
/// Returns an error if:
/// - The project does not exist
/// - The project already has a roadmap
pub fn create_roadmap(
    persistence: &mut Persistence,
    project_id: i64,
) -> Result<RoadmapInfo, ApiError> {
    let project: ProjectData = persistence
        .get_project(project_id)
        .map_err(translate_persistence_error)?;

    let command: Command = Command::CreateRoadmap {
        project_type: project.project_type,
    };
    let Outcome::RoadmapPlanned {
        project_type,
        phases,
    } = apply(&NO_RULES, command).map_err(translate_core_error)?
    else {
        return Err(unexpected_outcome("create_roadmap"));
    };

    let roadmap_id: i64 = persistence
        .create_roadmap(project_id, &project_type, &phases)
        .map_err(translate_persistence_error)?;

    info!(roadmap_id, project_id, %project_type, "Roadmap planned");

    get_roadmap(persistence, project_id)
}

/// Retrieves a project's roadmap with ordered phases.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the project has no roadmap.
pub fn get_roadmap(
    persistence: &mut Persistence,
    project_id: i64,
) -> Result<RoadmapInfo, ApiError> {
    persistence
        .get_roadmap(project_id)
        .map(roadmap_to_info)
        .map_err(translate_persistence_error)
}

/// Resolves requirements for an unsaved project.
///
/// An unknown jurisdiction yields an empty result, not an error.
#[must_use]
pub fn preview_requirements(
    catalog: &RuleCatalog,
    request: &PreviewRequirementsRequest,
) -> PreviewRequirementsResponse {
    let rules: Vec<&RequirementRule> = resolve_requirements(
        catalog,
        &request.jurisdiction,
        &request.project_type,
        &request.attributes,
    );

    PreviewRequirementsResponse {
        jurisdiction: request.jurisdiction.clone(),
        project_type: request.project_type.clone(),
        requirements: rules.iter().map(|rule| rule_to_info(rule)).collect(),
        disciplines: distinct_disciplines(&rules)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Resolves requirements for a stored project and creates discipline tasks.
///
/// Each discipline gets at most one task per project. Evaluating twice, or
/// concurrently, creates nothing new the second time.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `catalog` - The requirement rule catalog
/// * `project_id` - The project to evaluate
///
/// # Errors
///
/// Returns an error if:
/// - The project does not exist
/// - A task cannot be written
pub fn evaluate_requirements(
    persistence: &mut Persistence,
    catalog: &RuleCatalog,
    project_id: i64,
) -> Result<EvaluateRequirementsResponse, ApiError> {
    let project: ProjectData = persistence
        .get_project(project_id)
        .map_err(translate_persistence_error)?;
    let existing_task_titles: Vec<String> = persistence
        .list_tasks(project_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|task| task.title)
        .collect();

    let command: Command = Command::ResolveRequirements {
        jurisdiction: project.jurisdiction,
        project_type: project.project_type,
        attributes: project.attributes,
        existing_task_titles,
    };
    let Outcome::RequirementsResolved(plan) =
        apply(catalog, command).map_err(translate_core_error)?
    else {
        return Err(unexpected_outcome("evaluate_requirements"));
    };
    let RequirementPlan {
        rules,
        tasks_to_create,
    } = plan;

    let mut created_disciplines: Vec<String> = Vec::new();
    for task in &tasks_to_create {
        let created: bool = persistence
            .insert_requirement_task(project_id, task)
            .map_err(translate_persistence_error)?;
        if created {
            created_disciplines.push(task.discipline.clone());
        }
    }

    let tasks_created: Vec<TaskInfo> = persistence
        .list_tasks(project_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .filter(|task| {
            task.discipline
                .as_ref()
                .is_some_and(|d| created_disciplines.contains(d))
        })
        .map(task_to_info)
        .collect();

    info!(
        project_id,
        requirements = rules.len(),
        tasks_created = tasks_created.len(),
        "Requirements evaluated"
    );

    Ok(EvaluateRequirementsResponse {
        project_id,
        requirements: rules.iter().map(rule_to_info).collect(),
        message: format!(
            "{} requirement(s) apply; created {} task(s)",
            rules.len(),
            tasks_created.len()
        ),
        tasks_created,
    })
}

/// Creates a manual task with no discipline.
///
/// # Errors
///
/// Returns an error if:
/// - The title is blank
/// - The project does not exist
pub fn create_task(
    persistence: &mut Persistence,
    project_id: i64,
    request: &CreateTaskRequest,
) -> Result<TaskInfo, ApiError> {
    require_text("title", &request.title)?;

    let task_id: i64 = persistence
        .create_task(project_id, request.title.trim())
        .map_err(translate_persistence_error)?;

    persistence
        .get_task(task_id)
        .map(task_to_info)
        .map_err(translate_persistence_error)
}

/// Lists the tasks of a project.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the project does not exist.
pub fn list_tasks(
    persistence: &mut Persistence,
    project_id: i64,
) -> Result<ListTasksResponse, ApiError> {
    let tasks: Vec<TaskData> = persistence
        .list_tasks(project_id)
        .map_err(translate_persistence_error)?;

    Ok(ListTasksResponse {
        project_id,
        tasks: tasks.into_iter().map(task_to_info).collect(),
    })
}
