// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Zoning requirement and setback evaluation engine.
//!
//! Every function in this crate is pure: it receives fully-formed input and
//! returns either a validated result or a typed [`ValidationError`]. Nothing
//! here performs I/O or holds shared state, so all of it may be called from
//! any number of concurrent request handlers.

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

mod attributes;
mod error;
mod parcel;
mod roadmap;
mod rules;
mod setbacks;
mod shapes;
mod trigger;

#[cfg(test)]
mod tests;

pub use attributes::{AttributeValue, ProjectAttributes};
pub use error::ValidationError;
pub use parcel::ParcelBoundary;
pub use roadmap::{PhaseName, PhaseStatus, PhaseTemplate, RoadmapVariant, generate_roadmap_template};
pub use rules::{
    JurisdictionRules, RequirementRule, RuleCatalog, distinct_disciplines, resolve_requirements,
};
pub use setbacks::{EdgeLabel, SetbackSide, Setbacks, validate_edge_labels, validate_setbacks};
pub use shapes::{Position, ShapeMeasurements, ShapeType, measure_shape, normalize_coordinates};
pub use trigger::{Trigger, TriggerOperator, evaluate_trigger};
