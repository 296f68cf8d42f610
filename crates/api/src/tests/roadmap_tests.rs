// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::setup_with_project;
use crate::{
    ApiError, RoadmapInfo, RoadmapTemplateResponse, create_roadmap, get_roadmap,
    preview_roadmap_template,
};

#[test]
fn test_template_preview_for_every_project_type() {
    for project_type in [
        "ADU",
        "POOL",
        "ADDITION",
        "REMODEL",
        "NEW_CONSTRUCTION",
        "GAZEBO",
    ] {
        let preview: RoadmapTemplateResponse = preview_roadmap_template(project_type);

        assert_eq!(preview.phases.len(), 6);
        assert_eq!(preview.phases[0].status, "in_progress");
        for (index, phase) in preview.phases.iter().enumerate() {
            assert_eq!(usize::from(phase.order), index);
            assert!(phase.phase_id.is_none());
        }
    }
}

#[test]
fn test_unknown_project_type_previews_adu_content() {
    let unknown: RoadmapTemplateResponse = preview_roadmap_template("GAZEBO");
    let adu: RoadmapTemplateResponse = preview_roadmap_template("ADU");

    assert_eq!(unknown.phases, adu.phases);
    assert_eq!(unknown.project_type, "GAZEBO");
}

#[test]
fn test_create_roadmap_uses_project_type() {
    let (mut persistence, project_id) = setup_with_project();

    let roadmap: RoadmapInfo = create_roadmap(&mut persistence, project_id).unwrap();

    assert_eq!(roadmap.project_type, "ADDITION");
    assert_eq!(roadmap.phases.len(), 6);
    assert!(roadmap.phases.iter().all(|phase| phase.phase_id.is_some()));
    assert_eq!(roadmap.phases[0].name, "Discovery & Site Analysis");
    assert_eq!(roadmap.phases[5].name, "Permit Issuance");
    assert_eq!(get_roadmap(&mut persistence, project_id).unwrap(), roadmap);
}

#[test]
fn test_second_roadmap_is_a_rule_violation() {
    let (mut persistence, project_id) = setup_with_project();
    create_roadmap(&mut persistence, project_id).unwrap();

    let result: Result<RoadmapInfo, ApiError> = create_roadmap(&mut persistence, project_id);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "single_roadmap_per_project"
    ));
}

#[test]
fn test_missing_roadmap_is_not_found() {
    let (mut persistence, project_id) = setup_with_project();

    assert!(matches!(
        get_roadmap(&mut persistence, project_id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
