// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parcel mutations.

use citywise_domain::{EdgeLabel, ParcelBoundary, Setbacks};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{parcels, projects};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a parcel for a project.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project_id` - The owning project
/// * `apn` - The assessor's parcel number
/// * `boundary` - The parcel boundary, if known
///
/// # Returns
///
/// The ID of the new parcel.
///
/// # Errors
///
/// Returns `ProjectNotFound` if the project does not exist, or an error if
/// the insert fails.
pub fn create_parcel(
    conn: &mut _,
    project_id: i64,
    apn: &str,
    boundary: Option<&ParcelBoundary>,
) -> Result<i64, PersistenceError> {
    let project_count: i64 = projects::table
        .filter(projects::project_id.eq(project_id))
        .count()
        .get_result(conn)?;
    if project_count == 0 {
        return Err(PersistenceError::ProjectNotFound(project_id));
    }

    let boundary_json: Option<String> = boundary.map(serde_json::to_string).transpose()?;

    diesel::insert_into(parcels::table)
        .values((
            parcels::project_id.eq(project_id),
            parcels::apn.eq(apn),
            parcels::boundary_json.eq(&boundary_json),
        ))
        .execute(conn)?;

    let parcel_id: i64 = conn.get_last_insert_rowid()?;

    info!(parcel_id, project_id, apn, "Parcel created");

    Ok(parcel_id)
}
}

backend_fn! {
/// Replaces the setbacks and edge labels of a parcel.
///
/// All five columns are written by one `UPDATE`, so readers never see new
/// setbacks paired with old labels.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `parcel_id` - The parcel to update
/// * `setbacks` - Validated setbacks
/// * `edge_labels` - Validated edge labels
///
/// # Errors
///
/// Returns `ParcelNotFound` if no parcel was updated, or an error if the
/// update fails.
pub fn update_parcel_setbacks(
    conn: &mut _,
    parcel_id: i64,
    setbacks: &Setbacks,
    edge_labels: &[EdgeLabel],
) -> Result<(), PersistenceError> {
    let edge_labels_json: String = serde_json::to_string(edge_labels)?;

    debug!(parcel_id, labels = edge_labels.len(), "Updating parcel setbacks");

    let updated: usize = diesel::update(parcels::table)
        .filter(parcels::parcel_id.eq(parcel_id))
        .set((
            parcels::setback_front.eq(Some(setbacks.front)),
            parcels::setback_rear.eq(Some(setbacks.rear)),
            parcels::setback_side_left.eq(Some(setbacks.side_left)),
            parcels::setback_side_right.eq(Some(setbacks.side_right)),
            parcels::edge_labels_json.eq(Some(edge_labels_json)),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::ParcelNotFound(parcel_id));
    }

    Ok(())
}
}
