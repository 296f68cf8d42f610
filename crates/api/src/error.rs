// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use citywise::CoreError;
use citywise_domain::ValidationError;
use citywise_persistence::PersistenceError;
use tracing::error;

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a validation error into an API error.
///
/// Every validation error is caller-correctable, so all of them become
/// `InvalidInput`. The field names the part of the payload at fault.
#[must_use]
pub fn translate_validation_error(err: ValidationError) -> ApiError {
    let field: &str = match &err {
        ValidationError::MissingField { field } | ValidationError::Negative { field, .. } => field,
        ValidationError::LegacyFlatFormat { .. } | ValidationError::MissingCoordinates => {
            "coordinates"
        }
        ValidationError::EdgeIndexOutOfRange { .. } => "edgeLabels",
        ValidationError::InvalidFormat { .. } => "payload",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Validation(validation_err) => translate_validation_error(validation_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Missing records become `ResourceNotFound`. Anything the caller cannot fix
/// is logged here and reported as `Internal`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ProjectNotFound(project_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Project"),
            message: format!("Project {project_id} does not exist"),
        },
        PersistenceError::ParcelNotFound(parcel_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Parcel"),
            message: format!("Parcel {parcel_id} does not exist"),
        },
        PersistenceError::ShapeNotFound(shape_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shape"),
            message: format!("Shape {shape_id} does not exist"),
        },
        PersistenceError::TaskNotFound(task_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Task"),
            message: format!("Task {task_id} does not exist"),
        },
        PersistenceError::RoadmapNotFound { project_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Roadmap"),
            message: format!("Project {project_id} has no roadmap"),
        },
        PersistenceError::RoadmapAlreadyExists { project_id } => ApiError::DomainRuleViolation {
            rule: String::from("single_roadmap_per_project"),
            message: format!("Project {project_id} already has a roadmap"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        other => {
            error!(error = %other, "Persistence failure");
            ApiError::Internal {
                message: format!("Persistence error: {other}"),
            }
        }
    }
}
