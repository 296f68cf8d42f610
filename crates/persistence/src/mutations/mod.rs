// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Mutations use Diesel DSL and are backend-agnostic, with minimal use of
//! backend-specific helpers (e.g., `last_insert_rowid()` for `SQLite`).
//!
//! ## Module Organization
//!
//! - `projects` - Project creation
//! - `parcels` - Parcel creation and setback updates
//! - `shapes` - Shape storage, deletion and purge
//! - `roadmaps` - Transactional roadmap creation
//! - `tasks` - Manual and requirement task creation

pub mod parcels;
pub mod projects;
pub mod roadmaps;
pub mod shapes;
pub mod tasks;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

pub use parcels::{
    create_parcel_mysql, create_parcel_sqlite, update_parcel_setbacks_mysql,
    update_parcel_setbacks_sqlite,
};
pub use projects::{create_project_mysql, create_project_sqlite};
pub use roadmaps::{create_roadmap_mysql, create_roadmap_sqlite};
pub use shapes::{
    delete_shape_mysql, delete_shape_sqlite, delete_shapes_mysql, delete_shapes_sqlite,
    insert_shape_mysql, insert_shape_sqlite,
};
pub use tasks::{
    create_task_mysql, create_task_sqlite, insert_requirement_task_mysql,
    insert_requirement_task_sqlite,
};

/// Returns the current UTC time as an RFC 3339 string.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn now_rfc3339() -> Result<String, PersistenceError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}
