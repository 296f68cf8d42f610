// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::ProjectData;
use crate::diesel_schema::projects;
use crate::error::PersistenceError;

/// Diesel Queryable struct for project rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = projects)]
struct ProjectRow {
    project_id: i64,
    name: String,
    jurisdiction: String,
    project_type: String,
    attributes_json: String,
    created_at: String,
}

impl TryFrom<ProjectRow> for ProjectData {
    type Error = PersistenceError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            project_id: row.project_id,
            name: row.name,
            jurisdiction: row.jurisdiction,
            project_type: row.project_type,
            attributes: serde_json::from_str(&row.attributes_json)?,
            created_at: row.created_at,
        })
    }
}

backend_fn! {
/// Retrieves a project by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project_id` - The project ID
///
/// # Errors
///
/// Returns an error if the query fails or the stored attributes cannot be
/// decoded. Returns `Ok(None)` if the project does not exist.
pub fn get_project(
    conn: &mut _,
    project_id: i64,
) -> Result<Option<ProjectData>, PersistenceError> {
    debug!(project_id, "Looking up project");

    let row: Option<ProjectRow> = projects::table
        .filter(projects::project_id.eq(project_id))
        .select(ProjectRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_project: {e}")))?;

    row.map(ProjectData::try_from).transpose()
}
}

backend_fn! {
/// Checks whether a project exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn project_exists(conn: &mut _, project_id: i64) -> Result<bool, PersistenceError> {
    let count: i64 = projects::table
        .filter(projects::project_id.eq(project_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}
}
