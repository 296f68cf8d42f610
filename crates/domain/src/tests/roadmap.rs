// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PhaseName, PhaseStatus, PhaseTemplate, RoadmapVariant, generate_roadmap_template};

fn assert_roadmap_shape(phases: &[PhaseTemplate; 6]) {
    for (expected_order, phase) in phases.iter().enumerate() {
        assert_eq!(usize::from(phase.order), expected_order);
        assert_eq!(phase.name, PhaseName::ALL[expected_order]);
        assert!(!phase.estimated_duration.is_empty());
        assert!(!phase.services.is_empty());
    }
    assert_eq!(phases[0].status, PhaseStatus::InProgress);
    assert!(
        phases[1..]
            .iter()
            .all(|phase| phase.status == PhaseStatus::Waiting)
    );
}

#[test]
fn test_every_project_type_gets_six_ordered_phases() {
    for project_type in [
        "ADU",
        "POOL",
        "ADDITION",
        "REMODEL",
        "NEW_CONSTRUCTION",
        "BOATHOUSE",
        "",
    ] {
        assert_roadmap_shape(&generate_roadmap_template(project_type));
    }
}

#[test]
fn test_unknown_project_type_uses_adu_content() {
    assert_eq!(
        generate_roadmap_template("BOATHOUSE"),
        generate_roadmap_template("ADU")
    );
}

#[test]
fn test_pool_roadmap_differs_from_adu() {
    let pool: [PhaseTemplate; 6] = generate_roadmap_template("pool");
    let adu: [PhaseTemplate; 6] = generate_roadmap_template("ADU");
    assert_ne!(pool[1].services, adu[1].services);
    assert_eq!(pool[0], adu[0]);
    assert_eq!(pool[4], adu[4]);
}

#[test]
fn test_variant_matching_normalizes_separators() {
    assert_eq!(
        RoadmapVariant::for_project_type("new construction"),
        RoadmapVariant::NewConstruction
    );
    assert_eq!(
        RoadmapVariant::for_project_type("Home-Addition"),
        RoadmapVariant::Addition
    );
    assert_eq!(
        RoadmapVariant::for_project_type("spa"),
        RoadmapVariant::Pool
    );
    assert_eq!(
        RoadmapVariant::for_project_type("garage"),
        RoadmapVariant::Adu
    );
}

#[test]
fn test_phase_names_round_trip_through_display() {
    for phase in PhaseName::ALL {
        assert_eq!(phase.to_string().parse::<PhaseName>().unwrap(), phase);
    }
    assert!("Inspection".parse::<PhaseName>().is_err());
    assert_eq!(
        serde_json::to_value(PhaseName::DiscoverySiteAnalysis).unwrap(),
        "Discovery & Site Analysis"
    );
}

#[test]
fn test_phase_status_storage_form() {
    assert_eq!(PhaseStatus::InProgress.as_str(), "in_progress");
    assert_eq!(
        "completed".parse::<PhaseStatus>().unwrap(),
        PhaseStatus::Completed
    );
    assert!("done".parse::<PhaseStatus>().is_err());
    assert_eq!(PhaseStatus::default(), PhaseStatus::Waiting);
}
