// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `projects` - Project lookups
//! - `parcels` - Parcels with their setbacks and edge labels
//! - `shapes` - Drawn shapes, decoded or raw
//! - `roadmaps` - Roadmaps and their ordered phases
//! - `tasks` - Project tasks
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod parcels;
pub mod projects;
pub mod roadmaps;
pub mod shapes;
pub mod tasks;

pub use parcels::{get_parcel_mysql, get_parcel_sqlite};
pub use projects::{
    get_project_mysql, get_project_sqlite, project_exists_mysql, project_exists_sqlite,
};
pub use roadmaps::{get_roadmap_for_project_mysql, get_roadmap_for_project_sqlite};
pub use shapes::{
    get_shape_mysql, get_shape_sqlite, list_shape_records_mysql, list_shape_records_sqlite,
    list_shapes_for_project_mysql, list_shapes_for_project_sqlite,
};
pub use tasks::{
    get_task_mysql, get_task_sqlite, list_tasks_for_project_mysql, list_tasks_for_project_sqlite,
};
