// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permit roadmap phase templates.
//!
//! Every roadmap has the same six phases in the same order. The project type
//! only changes the duration and services of the design, engineering and
//! package-preparation phases, looked up from a static table.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six permitting phases, in roadmap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    /// Research of the parcel, zoning and site constraints.
    #[serde(rename = "Discovery & Site Analysis")]
    DiscoverySiteAnalysis,
    /// Architectural design.
    #[serde(rename = "Design & Planning")]
    DesignPlanning,
    /// Engineering work and code compliance.
    #[serde(rename = "Engineering & Compliance")]
    EngineeringCompliance,
    /// Assembly of the submittal package.
    #[serde(rename = "Permit Package Preparation")]
    PermitPackagePreparation,
    /// Plan check by the jurisdiction.
    #[serde(rename = "City Review")]
    CityReview,
    /// Fees, issuance and inspection scheduling.
    #[serde(rename = "Permit Issuance")]
    PermitIssuance,
}

impl PhaseName {
    /// All phases in roadmap order.
    pub const ALL: [Self; 6] = [
        Self::DiscoverySiteAnalysis,
        Self::DesignPlanning,
        Self::EngineeringCompliance,
        Self::PermitPackagePreparation,
        Self::CityReview,
        Self::PermitIssuance,
    ];

    /// Returns the display name of the phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DiscoverySiteAnalysis => "Discovery & Site Analysis",
            Self::DesignPlanning => "Design & Planning",
            Self::EngineeringCompliance => "Engineering & Compliance",
            Self::PermitPackagePreparation => "Permit Package Preparation",
            Self::CityReview => "City Review",
            Self::PermitIssuance => "Permit Issuance",
        }
    }

    /// Returns the 0-based position of the phase in every roadmap.
    #[must_use]
    pub const fn order(&self) -> u8 {
        match self {
            Self::DiscoverySiteAnalysis => 0,
            Self::DesignPlanning => 1,
            Self::EngineeringCompliance => 2,
            Self::PermitPackagePreparation => 3,
            Self::CityReview => 4,
            Self::PermitIssuance => 5,
        }
    }
}

impl FromStr for PhaseName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format(format!("Unknown phase '{s}'")))
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress of a roadmap phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// Not started.
    #[default]
    Waiting,
    /// Currently being worked.
    InProgress,
    /// All tasks done.
    Completed,
}

impl PhaseStatus {
    /// Returns the storage form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for PhaseStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ValidationError::invalid_format(format!(
                "Unknown phase status '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The project-type families with distinct roadmap content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadmapVariant {
    /// Accessory dwelling unit; also the fallback for unknown types.
    Adu,
    /// Swimming pool or spa.
    Pool,
    /// Addition to an existing structure.
    Addition,
    /// Interior or structural remodel.
    Remodel,
    /// Ground-up construction.
    NewConstruction,
}

impl RoadmapVariant {
    /// Selects the variant for a project type.
    ///
    /// Matching ignores case and treats spaces and hyphens as underscores.
    /// Unrecognized project types fall back to `Adu`.
    #[must_use]
    pub fn for_project_type(project_type: &str) -> Self {
        let normalized: String = project_type.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "POOL" | "SPA" | "POOL_SPA" => Self::Pool,
            "ADDITION" | "HOME_ADDITION" => Self::Addition,
            "REMODEL" | "RENOVATION" => Self::Remodel,
            "NEW_CONSTRUCTION" | "NEW_BUILD" => Self::NewConstruction,
            _ => Self::Adu,
        }
    }
}

/// Default content of one phase for a project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTemplate {
    /// The phase.
    pub name: PhaseName,
    /// 0-based position, unique within a roadmap.
    pub order: u8,
    /// Initial status.
    pub status: PhaseStatus,
    /// Human-readable duration estimate.
    pub estimated_duration: String,
    /// Services delivered in this phase for the project type.
    pub services: Vec<String>,
}

struct PhaseContent {
    duration: &'static str,
    services: &'static [&'static str],
}

const DISCOVERY: PhaseContent = PhaseContent {
    duration: "1-2 weeks",
    services: &[
        "Parcel and zoning research",
        "Site survey review",
        "Setback and easement analysis",
    ],
};

const CITY_REVIEW: PhaseContent = PhaseContent {
    duration: "4-8 weeks",
    services: &[
        "Plan check submittal",
        "Correction responses",
        "Reviewer coordination",
    ],
};

const ISSUANCE: PhaseContent = PhaseContent {
    duration: "1 week",
    services: &[
        "Permit fee payment",
        "Permit issuance",
        "Inspection scheduling",
    ],
};

/// Design, engineering and package content, by variant.
const fn variant_content(variant: RoadmapVariant) -> [PhaseContent; 3] {
    match variant {
        RoadmapVariant::Adu => [
            PhaseContent {
                duration: "3-4 weeks",
                services: &["ADU floor plan", "Site plan", "Exterior elevations"],
            },
            PhaseContent {
                duration: "2-3 weeks",
                services: &[
                    "Structural engineering",
                    "Title 24 energy compliance",
                    "Utility connection planning",
                ],
            },
            PhaseContent {
                duration: "1-2 weeks",
                services: &[
                    "Construction drawings",
                    "Fire sprinkler determination",
                    "Permit application forms",
                ],
            },
        ],
        RoadmapVariant::Pool => [
            PhaseContent {
                duration: "1-2 weeks",
                services: &[
                    "Pool layout",
                    "Equipment placement",
                    "Barrier and fencing plan",
                ],
            },
            PhaseContent {
                duration: "1-2 weeks",
                services: &[
                    "Pool structural engineering",
                    "Soils report review",
                    "Drainage plan",
                ],
            },
            PhaseContent {
                duration: "1 week",
                services: &[
                    "Pool construction plans",
                    "Barrier compliance checklist",
                    "Permit application forms",
                ],
            },
        ],
        RoadmapVariant::Addition => [
            PhaseContent {
                duration: "2-4 weeks",
                services: &[
                    "Existing conditions survey",
                    "Addition floor plan",
                    "Roof integration design",
                ],
            },
            PhaseContent {
                duration: "2-4 weeks",
                services: &[
                    "Structural engineering",
                    "Foundation design",
                    "Energy compliance",
                ],
            },
            PhaseContent {
                duration: "1-2 weeks",
                services: &[
                    "Construction drawings",
                    "Structural calculations package",
                    "Permit application forms",
                ],
            },
        ],
        RoadmapVariant::Remodel => [
            PhaseContent {
                duration: "2-3 weeks",
                services: &["Existing conditions survey", "Remodel floor plan"],
            },
            PhaseContent {
                duration: "1-2 weeks",
                services: &[
                    "Structural review of removed walls",
                    "Mechanical, electrical and plumbing review",
                ],
            },
            PhaseContent {
                duration: "1 week",
                services: &["Construction drawings", "Permit application forms"],
            },
        ],
        RoadmapVariant::NewConstruction => [
            PhaseContent {
                duration: "6-8 weeks",
                services: &[
                    "Schematic design",
                    "Design development",
                    "Site plan and landscaping",
                ],
            },
            PhaseContent {
                duration: "4-6 weeks",
                services: &[
                    "Structural engineering",
                    "Civil and grading plan",
                    "Mechanical, electrical and plumbing design",
                    "Energy compliance",
                ],
            },
            PhaseContent {
                duration: "2-3 weeks",
                services: &[
                    "Construction document set",
                    "Calculation packages",
                    "Permit application forms",
                ],
            },
        ],
    }
}

/// Generates the six phase templates of a new roadmap.
///
/// Always returns the same six phases with orders `0..=5`. The first phase is
/// `in_progress` and the rest are `waiting`. Unrecognized project types use
/// the ADU content.
///
/// # Arguments
///
/// * `project_type` - The project type of the roadmap's project
#[must_use]
pub fn generate_roadmap_template(project_type: &str) -> [PhaseTemplate; 6] {
    let [design, engineering, package] =
        variant_content(RoadmapVariant::for_project_type(project_type));

    PhaseName::ALL.map(|name| {
        let content: &PhaseContent = match name {
            PhaseName::DiscoverySiteAnalysis => &DISCOVERY,
            PhaseName::DesignPlanning => &design,
            PhaseName::EngineeringCompliance => &engineering,
            PhaseName::PermitPackagePreparation => &package,
            PhaseName::CityReview => &CITY_REVIEW,
            PhaseName::PermitIssuance => &ISSUANCE,
        };
        let status: PhaseStatus = if name.order() == 0 {
            PhaseStatus::InProgress
        } else {
            PhaseStatus::Waiting
        };
        PhaseTemplate {
            name,
            order: name.order(),
            status,
            estimated_duration: content.duration.to_string(),
            services: content.services.iter().map(ToString::to_string).collect(),
        }
    })
}
