// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parcel queries.

use citywise_domain::{EdgeLabel, ParcelBoundary, Setbacks};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::ParcelData;
use crate::diesel_schema::parcels;
use crate::error::PersistenceError;

/// Diesel Queryable struct for parcel rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = parcels)]
struct ParcelRow {
    parcel_id: i64,
    project_id: i64,
    apn: String,
    boundary_json: Option<String>,
    setback_front: Option<f64>,
    setback_rear: Option<f64>,
    setback_side_left: Option<f64>,
    setback_side_right: Option<f64>,
    edge_labels_json: Option<String>,
}

impl TryFrom<ParcelRow> for ParcelData {
    type Error = PersistenceError;

    fn try_from(row: ParcelRow) -> Result<Self, Self::Error> {
        let boundary: Option<ParcelBoundary> = row
            .boundary_json
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;

        let setbacks: Option<Setbacks> = match (
            row.setback_front,
            row.setback_rear,
            row.setback_side_left,
            row.setback_side_right,
        ) {
            (Some(front), Some(rear), Some(side_left), Some(side_right)) => Some(Setbacks {
                front,
                rear,
                side_left,
                side_right,
            }),
            _ => None,
        };

        let edge_labels: Vec<EdgeLabel> = match row.edge_labels_json.as_deref() {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };

        Ok(Self {
            parcel_id: row.parcel_id,
            project_id: row.project_id,
            apn: row.apn,
            boundary,
            setbacks,
            edge_labels,
        })
    }
}

backend_fn! {
/// Retrieves a parcel by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `parcel_id` - The parcel ID
///
/// # Errors
///
/// Returns an error if the query fails or a stored JSON column cannot be
/// decoded. Returns `Ok(None)` if the parcel does not exist.
pub fn get_parcel(conn: &mut _, parcel_id: i64) -> Result<Option<ParcelData>, PersistenceError> {
    debug!(parcel_id, "Looking up parcel");

    let row: Option<ParcelRow> = parcels::table
        .filter(parcels::parcel_id.eq(parcel_id))
        .select(ParcelRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_parcel: {e}")))?;

    row.map(ParcelData::try_from).transpose()
}
}
