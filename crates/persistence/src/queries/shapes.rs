// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Drawn shape queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{DrawnShapeData, StoredShapeRecord};
use crate::diesel_schema::drawn_shapes;
use crate::error::PersistenceError;

/// Diesel Queryable struct for drawn shape rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = drawn_shapes)]
struct DrawnShapeRow {
    shape_id: i64,
    project_id: i64,
    shape_type: String,
    coordinates_json: String,
    area_sq_meters: f64,
    perimeter_meters: f64,
    properties_json: String,
    created_at: String,
}

impl TryFrom<DrawnShapeRow> for DrawnShapeData {
    type Error = PersistenceError;

    fn try_from(row: DrawnShapeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            shape_id: row.shape_id,
            project_id: row.project_id,
            shape_type: row.shape_type,
            coordinates: serde_json::from_str(&row.coordinates_json)?,
            area_sq_meters: row.area_sq_meters,
            perimeter_meters: row.perimeter_meters,
            properties: serde_json::from_str(&row.properties_json)?,
            created_at: row.created_at,
        })
    }
}

backend_fn! {
/// Lists the shapes of a project in creation order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored JSON column cannot be
/// decoded.
pub fn list_shapes_for_project(
    conn: &mut _,
    project_id: i64,
) -> Result<Vec<DrawnShapeData>, PersistenceError> {
    drawn_shapes::table
        .filter(drawn_shapes::project_id.eq(project_id))
        .order(drawn_shapes::shape_id.asc())
        .select(DrawnShapeRow::as_select())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_shapes_for_project: {e}")))?
        .into_iter()
        .map(DrawnShapeData::try_from)
        .collect()
}
}

backend_fn! {
/// Retrieves one shape by ID.
///
/// # Returns
///
/// `None` if no shape has the ID.
///
/// # Errors
///
/// Returns an error if the query fails or the shape's JSON columns cannot be
/// decoded.
pub fn get_shape(conn: &mut _, shape_id: i64) -> Result<Option<DrawnShapeData>, PersistenceError> {
    let row: Option<DrawnShapeRow> = drawn_shapes::table
        .filter(drawn_shapes::shape_id.eq(shape_id))
        .select(DrawnShapeRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_shape: {e}")))?;

    row.map(DrawnShapeData::try_from).transpose()
}
}

backend_fn! {
/// Lists the raw coordinate columns of every stored shape.
///
/// The columns are not decoded, so corrupted records are listed too.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_shape_records(conn: &mut _) -> Result<Vec<StoredShapeRecord>, PersistenceError> {
    let rows: Vec<(i64, String, String)> = drawn_shapes::table
        .order(drawn_shapes::shape_id.asc())
        .select((
            drawn_shapes::shape_id,
            drawn_shapes::shape_type,
            drawn_shapes::coordinates_json,
        ))
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_shape_records: {e}")))?;

    Ok(rows
        .into_iter()
        .map(|(shape_id, shape_type, coordinates_json)| StoredShapeRecord {
            shape_id,
            shape_type,
            coordinates_json,
        })
        .collect())
}
}
