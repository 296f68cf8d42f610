// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::outcome::{NormalizedShape, Outcome};
use crate::requirements::plan_requirement_tasks;
use citywise_domain::{
    EdgeLabel, PhaseTemplate, Position, RequirementRule, RuleCatalog, Setbacks, ShapeMeasurements,
    ShapeType, ValidationError, generate_roadmap_template, measure_shape, normalize_coordinates,
    resolve_requirements, validate_edge_labels, validate_setbacks,
};
use serde_json::{Map, Value};

/// Applies a command, producing a validated outcome ready for persistence.
///
/// Nothing is stored here; a rejected command leaves no trace.
///
/// # Arguments
///
/// * `catalog` - The requirement rule catalog
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Outcome)` describing what the caller should store
/// * `Err(CoreError)` if the command's payload is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The setbacks or edge labels fail validation
/// - The shape coordinates fail normalization or cannot be measured
pub fn apply(catalog: &RuleCatalog, command: Command) -> Result<Outcome, CoreError> {
    match command {
        Command::SetParcelSetbacks {
            setbacks,
            edge_labels,
            boundary_edge_count,
        } => {
            // Both parts are validated before either is accepted
            let setbacks: Setbacks = validate_setbacks(&setbacks)?;
            let edge_labels: Vec<EdgeLabel> =
                validate_edge_labels(edge_labels.as_ref(), boundary_edge_count)?;

            Ok(Outcome::SetbacksAccepted {
                setbacks,
                edge_labels,
            })
        }
        Command::RecordShape {
            shape_type,
            coordinates,
            properties,
        } => {
            let shape_type: ShapeType = ShapeType::from(shape_type);
            let coordinates: Vec<Position> =
                normalize_coordinates(coordinates.as_ref(), &shape_type)?;
            let measurements: ShapeMeasurements =
                measure_shape(&shape_type, &coordinates, &properties);
            if !measurements.is_finite() {
                return Err(ValidationError::invalid_format(
                    "Shape cannot be measured; coordinates must be valid longitude/latitude \
                     and the radius a finite distance",
                )
                .into());
            }
            let properties: Value = match properties {
                Value::Object(_) => properties,
                _ => Value::Object(Map::new()),
            };

            Ok(Outcome::ShapeAccepted(NormalizedShape {
                shape_type,
                coordinates,
                measurements,
                properties,
            }))
        }
        Command::CreateRoadmap { project_type } => {
            let phases: [PhaseTemplate; 6] = generate_roadmap_template(&project_type);
            Ok(Outcome::RoadmapPlanned {
                project_type,
                phases,
            })
        }
        Command::ResolveRequirements {
            jurisdiction,
            project_type,
            attributes,
            existing_task_titles,
        } => {
            let rules: Vec<&RequirementRule> =
                resolve_requirements(catalog, &jurisdiction, &project_type, &attributes);
            Ok(Outcome::RequirementsResolved(plan_requirement_tasks(
                &rules,
                &existing_task_titles,
            )))
        }
    }
}
