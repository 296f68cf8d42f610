// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project task queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::TaskData;
use crate::diesel_schema::project_tasks;
use crate::error::PersistenceError;

/// Diesel Queryable struct for task rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = project_tasks)]
struct TaskRow {
    task_id: i64,
    project_id: i64,
    title: String,
    discipline: Option<String>,
    status: String,
    created_at: String,
}

impl From<TaskRow> for TaskData {
    fn from(row: TaskRow) -> Self {
        Self {
            task_id: row.task_id,
            project_id: row.project_id,
            title: row.title,
            discipline: row.discipline,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists the tasks of a project in creation order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_tasks_for_project(
    conn: &mut _,
    project_id: i64,
) -> Result<Vec<TaskData>, PersistenceError> {
    let rows: Vec<TaskRow> = project_tasks::table
        .filter(project_tasks::project_id.eq(project_id))
        .order(project_tasks::task_id.asc())
        .select(TaskRow::as_select())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_tasks_for_project: {e}")))?;

    Ok(rows.into_iter().map(TaskData::from).collect())
}
}

backend_fn! {
/// Retrieves one task by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_task(conn: &mut _, task_id: i64) -> Result<Option<TaskData>, PersistenceError> {
    let row: Option<TaskRow> = project_tasks::table
        .filter(project_tasks::task_id.eq(task_id))
        .select(TaskRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_task: {e}")))?;

    Ok(row.map(TaskData::from))
}
}
