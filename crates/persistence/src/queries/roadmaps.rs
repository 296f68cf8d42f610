// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roadmap queries.

use citywise_domain::{PhaseName, PhaseStatus};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use tracing::debug;

use crate::data_models::{RoadmapData, RoadmapPhaseData};
use crate::diesel_schema::{project_roadmaps, roadmap_phases};
use crate::error::PersistenceError;

/// Diesel Queryable struct for roadmap rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = project_roadmaps)]
struct RoadmapRow {
    roadmap_id: i64,
    project_id: i64,
    project_type: String,
    created_at: String,
}

/// Diesel Queryable struct for roadmap phase rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = roadmap_phases)]
struct RoadmapPhaseRow {
    phase_id: i64,
    name: String,
    phase_order: i32,
    status: String,
    estimated_duration: String,
    services_json: String,
}

impl TryFrom<RoadmapPhaseRow> for RoadmapPhaseData {
    type Error = PersistenceError;

    fn try_from(row: RoadmapPhaseRow) -> Result<Self, Self::Error> {
        let name: PhaseName = row
            .name
            .parse()
            .map_err(|e| PersistenceError::SerializationError(format!("{e}")))?;
        let status: PhaseStatus = row
            .status
            .parse()
            .map_err(|e| PersistenceError::SerializationError(format!("{e}")))?;
        let order: u8 = row.phase_order.to_u8().ok_or_else(|| {
            PersistenceError::SerializationError(format!(
                "Phase order {} is out of range",
                row.phase_order
            ))
        })?;

        Ok(Self {
            phase_id: row.phase_id,
            name,
            order,
            status,
            estimated_duration: row.estimated_duration,
            services: serde_json::from_str(&row.services_json)?,
        })
    }
}

backend_fn! {
/// Retrieves the roadmap of a project with its phases ordered by `order`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project_id` - The owning project
///
/// # Errors
///
/// Returns an error if a query fails or a stored phase cannot be decoded.
/// Returns `Ok(None)` if the project has no roadmap.
pub fn get_roadmap_for_project(
    conn: &mut _,
    project_id: i64,
) -> Result<Option<RoadmapData>, PersistenceError> {
    debug!(project_id, "Looking up roadmap");

    let Some(roadmap): Option<RoadmapRow> = project_roadmaps::table
        .filter(project_roadmaps::project_id.eq(project_id))
        .select(RoadmapRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_roadmap_for_project: {e}")))?
    else {
        return Ok(None);
    };

    let phases: Vec<RoadmapPhaseData> = roadmap_phases::table
        .filter(roadmap_phases::roadmap_id.eq(roadmap.roadmap_id))
        .order(roadmap_phases::phase_order.asc())
        .select(RoadmapPhaseRow::as_select())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_roadmap_for_project: {e}")))?
        .into_iter()
        .map(RoadmapPhaseData::try_from)
        .collect::<Result<Vec<RoadmapPhaseData>, PersistenceError>>()?;

    Ok(Some(RoadmapData {
        roadmap_id: roadmap.roadmap_id,
        project_id: roadmap.project_id,
        project_type: roadmap.project_type,
        created_at: roadmap.created_at,
        phases,
    }))
}
}
