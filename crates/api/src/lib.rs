// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary of the CityWise zoning engine.
//!
//! Handlers take the persistence adapter and a request, run the request
//! through the command layer, store the validated outcome and return a
//! response DTO. Domain, core and persistence errors never cross this
//! boundary; they are translated into [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_persistence_error, translate_validation_error,
};
pub use handlers::{
    create_parcel, create_project, create_roadmap, create_shape, create_task, delete_shape,
    evaluate_requirements, get_parcel, get_project, get_roadmap, list_shapes, list_tasks,
    preview_requirements, preview_roadmap_template, purge_corrupted_shapes, set_parcel_setbacks,
};
pub use request_response::{
    CreateParcelRequest, CreateParcelResponse, CreateProjectRequest, CreateProjectResponse,
    CreateShapeRequest, CreateTaskRequest, DeleteShapeResponse, EvaluateRequirementsResponse,
    ListShapesResponse, ListTasksResponse, ParcelInfo, PhaseInfo, PreviewRequirementsRequest,
    PreviewRequirementsResponse, ProjectInfo, PurgeCorruptedShapesResponse, PurgedShapeInfo,
    RequirementInfo, RoadmapInfo, RoadmapTemplateResponse, SetSetbacksRequest, SetSetbacksResponse,
    ShapeInfo, TaskInfo,
};
