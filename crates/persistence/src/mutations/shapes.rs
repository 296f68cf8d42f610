// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drawn shape mutations.

use citywise::NormalizedShape;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{drawn_shapes, projects};
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;

backend_fn! {
/// Stores a normalized shape.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project_id` - The owning project
/// * `shape` - A shape that passed normalization
///
/// # Returns
///
/// The ID of the new shape.
///
/// # Errors
///
/// Returns `ProjectNotFound` if the project does not exist, or an error if
/// the insert fails.
pub fn insert_shape(
    conn: &mut _,
    project_id: i64,
    shape: &NormalizedShape,
) -> Result<i64, PersistenceError> {
    let project_count: i64 = projects::table
        .filter(projects::project_id.eq(project_id))
        .count()
        .get_result(conn)?;
    if project_count == 0 {
        return Err(PersistenceError::ProjectNotFound(project_id));
    }

    let coordinates_json: String = serde_json::to_string(&shape.coordinates)?;
    let properties_json: String = serde_json::to_string(&shape.properties)?;
    let created_at: String = now_rfc3339()?;

    diesel::insert_into(drawn_shapes::table)
        .values((
            drawn_shapes::project_id.eq(project_id),
            drawn_shapes::shape_type.eq(shape.shape_type.as_str()),
            drawn_shapes::coordinates_json.eq(&coordinates_json),
            drawn_shapes::area_sq_meters.eq(shape.measurements.area_sq_meters),
            drawn_shapes::perimeter_meters.eq(shape.measurements.perimeter_meters),
            drawn_shapes::properties_json.eq(&properties_json),
            drawn_shapes::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let shape_id: i64 = conn.get_last_insert_rowid()?;

    info!(shape_id, project_id, shape_type = %shape.shape_type, "Shape stored");

    Ok(shape_id)
}
}

backend_fn! {
/// Deletes one shape.
///
/// # Errors
///
/// Returns `ShapeNotFound` if no shape was deleted.
pub fn delete_shape(conn: &mut _, shape_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(drawn_shapes::table.filter(drawn_shapes::shape_id.eq(shape_id)))
            .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::ShapeNotFound(shape_id));
    }

    info!(shape_id, "Shape deleted");
    Ok(())
}
}

backend_fn! {
/// Deletes every shape whose ID is listed.
///
/// # Returns
///
/// The number of shapes deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_shapes(conn: &mut _, shape_ids: &[i64]) -> Result<usize, PersistenceError> {
    if shape_ids.is_empty() {
        return Ok(0);
    }

    let deleted: usize =
        diesel::delete(drawn_shapes::table.filter(drawn_shapes::shape_id.eq_any(shape_ids)))
            .execute(conn)?;

    warn!(deleted, "Deleted stored shapes");
    Ok(deleted)
}
}
