// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project task mutations.

use citywise::RequirementTask;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{project_tasks, projects};
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;

backend_fn! {
/// Creates a manual task without a discipline.
///
/// # Returns
///
/// The ID of the new task.
///
/// # Errors
///
/// Returns `ProjectNotFound` if the project does not exist, or an error if
/// the insert fails.
pub fn create_task(conn: &mut _, project_id: i64, title: &str) -> Result<i64, PersistenceError> {
    let project_count: i64 = projects::table
        .filter(projects::project_id.eq(project_id))
        .count()
        .get_result(conn)?;
    if project_count == 0 {
        return Err(PersistenceError::ProjectNotFound(project_id));
    }

    let created_at: String = now_rfc3339()?;

    diesel::insert_into(project_tasks::table)
        .values((
            project_tasks::project_id.eq(project_id),
            project_tasks::title.eq(title),
            project_tasks::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let task_id: i64 = conn.get_last_insert_rowid()?;

    info!(task_id, project_id, "Task created");

    Ok(task_id)
}
}

backend_fn! {
/// Inserts a requirement task unless the project already has one for the
/// same discipline.
///
/// Uniqueness of `(project_id, discipline)` is enforced by the schema, so
/// concurrent evaluations of the same project create each discipline task
/// exactly once.
///
/// # Returns
///
/// `true` if a task was created, `false` if one already existed.
///
/// # Errors
///
/// Returns an error if the insert fails for any other reason.
pub fn insert_requirement_task(
    conn: &mut _,
    project_id: i64,
    task: &RequirementTask,
) -> Result<bool, PersistenceError> {
    let created_at: String = now_rfc3339()?;

    let inserted: usize = diesel::insert_or_ignore_into(project_tasks::table)
        .values((
            project_tasks::project_id.eq(project_id),
            project_tasks::title.eq(&task.title),
            project_tasks::discipline.eq(Some(task.discipline.as_str())),
            project_tasks::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    if inserted == 0 {
        debug!(project_id, discipline = %task.discipline, "Requirement task already exists");
        return Ok(false);
    }

    info!(project_id, discipline = %task.discipline, "Requirement task created");
    Ok(true)
}
}
