// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roadmap mutations.

use citywise_domain::PhaseTemplate;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{project_roadmaps, projects, roadmap_phases};
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;

backend_fn! {
/// Creates the roadmap of a project together with all of its phases.
///
/// The roadmap row and every phase row are written in one transaction; a
/// failure leaves no partial roadmap behind.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project_id` - The owning project
/// * `project_type` - The project type the phases were generated for
/// * `phases` - The phase templates, in order
///
/// # Returns
///
/// The ID of the new roadmap.
///
/// # Errors
///
/// Returns an error if:
/// - The project does not exist (`ProjectNotFound`)
/// - The project already has a roadmap (`RoadmapAlreadyExists`)
/// - Any insert fails
pub fn create_roadmap(
    conn: &mut _,
    project_id: i64,
    project_type: &str,
    phases: &[PhaseTemplate],
) -> Result<i64, PersistenceError> {
    let created_at: String = now_rfc3339()?;

    let roadmap_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        let project_count: i64 = projects::table
            .filter(projects::project_id.eq(project_id))
            .count()
            .get_result(conn)?;
        if project_count == 0 {
            return Err(PersistenceError::ProjectNotFound(project_id));
        }

        let roadmap_count: i64 = project_roadmaps::table
            .filter(project_roadmaps::project_id.eq(project_id))
            .count()
            .get_result(conn)?;
        if roadmap_count > 0 {
            return Err(PersistenceError::RoadmapAlreadyExists { project_id });
        }

        diesel::insert_into(project_roadmaps::table)
            .values((
                project_roadmaps::project_id.eq(project_id),
                project_roadmaps::project_type.eq(project_type),
                project_roadmaps::created_at.eq(&created_at),
            ))
            .execute(conn)?;

        let roadmap_id: i64 = conn.get_last_insert_rowid()?;

        for phase in phases {
            let services_json: String = serde_json::to_string(&phase.services)?;
            diesel::insert_into(roadmap_phases::table)
                .values((
                    roadmap_phases::roadmap_id.eq(roadmap_id),
                    roadmap_phases::name.eq(phase.name.as_str()),
                    roadmap_phases::phase_order.eq(i32::from(phase.order)),
                    roadmap_phases::status.eq(phase.status.as_str()),
                    roadmap_phases::estimated_duration.eq(&phase.estimated_duration),
                    roadmap_phases::services_json.eq(&services_json),
                ))
                .execute(conn)?;
        }

        Ok(roadmap_id)
    })?;

    info!(roadmap_id, project_id, phases = phases.len(), "Roadmap created");

    Ok(roadmap_id)
}
}
