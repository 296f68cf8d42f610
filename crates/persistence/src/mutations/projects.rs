// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewProject;
use crate::diesel_schema::projects;
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;

backend_fn! {
/// Creates a new project.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project` - The project fields
///
/// # Returns
///
/// The ID of the new project.
///
/// # Errors
///
/// Returns an error if the attributes cannot be serialized or the insert
/// fails.
pub fn create_project(conn: &mut _, project: &NewProject) -> Result<i64, PersistenceError> {
    let attributes_json: String = serde_json::to_string(&project.attributes)?;
    let created_at: String = now_rfc3339()?;

    diesel::insert_into(projects::table)
        .values((
            projects::name.eq(&project.name),
            projects::jurisdiction.eq(&project.jurisdiction),
            projects::project_type.eq(&project.project_type),
            projects::attributes_json.eq(&attributes_json),
            projects::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let project_id: i64 = conn.get_last_insert_rowid()?;

    info!(
        project_id,
        jurisdiction = %project.jurisdiction,
        project_type = %project.project_type,
        "Project created"
    );

    Ok(project_id)
}
}
