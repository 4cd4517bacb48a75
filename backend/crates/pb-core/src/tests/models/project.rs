use crate::{CoreError, Project, ProjectPatch};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn test_project_new_only_sets_key() {
    let project = Project::new(42);

    assert_eq!(project.project_id, 42);
    assert_eq!(project.project_name, None);
    assert_eq!(project.final_budget_usd, None);
}

#[test]
fn test_project_serializes_with_camel_case_and_nulls() {
    let mut project = Project::new(1);
    project.project_name = Some("Choucroute Cartier".to_string());
    project.final_budget_usd = Some(110000.0);

    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["projectId"], 1);
    assert_eq!(value["projectName"], "Choucroute Cartier");
    assert_eq!(value["finalBudgetUsd"], 110000.0);
    assert!(value["initialScheduleEstimateMonths"].is_null());
    assert_eq!(value.as_object().unwrap().len(), 11);
}

#[test]
fn test_apply_only_touches_present_fields() {
    let mut project = Project::new(1);
    project.project_name = Some("Rigua Nintendo".to_string());
    project.year = Some(2024);

    let patch = ProjectPatch {
        year: Some(2025),
        escalation_rate: Some(3.46),
        ..Default::default()
    };
    project.apply(&patch);

    assert_that!(project.project_name.as_deref(), some(eq("Rigua Nintendo")));
    assert_that!(project.year, some(eq(2025)));
    assert_that!(project.escalation_rate, some(eq(3.46)));
}

#[test]
fn test_patch_deserializes_partial_body() {
    let patch: ProjectPatch = serde_json::from_value(json!({
        "projectName": "Updated",
        "budgetUsd": null
    }))
    .unwrap();

    assert_eq!(patch.project_name.as_deref(), Some("Updated"));
    assert_eq!(patch.budget_usd, None);
    assert!(!patch.is_empty());
    assert!(ProjectPatch::default().is_empty());
}

#[test]
fn test_into_project_requires_project_id() {
    let patch = ProjectPatch {
        project_name: Some("Test".to_string()),
        ..Default::default()
    };

    match patch.into_project() {
        Err(CoreError::Validation { message, .. }) => assert_eq!(message, "projectId required"),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_into_project_rejects_zero_id() {
    let patch = ProjectPatch {
        project_id: Some(0),
        ..Default::default()
    };

    assert!(patch.into_project().is_err());
}

#[test]
fn test_into_project_copies_fields() {
    let patch = ProjectPatch {
        project_id: Some(2),
        project_name: Some("Test".to_string()),
        year: Some(2025),
        ..Default::default()
    };

    let project = patch.into_project().unwrap();

    assert_eq!(project.project_id, 2);
    assert_eq!(project.project_name.as_deref(), Some("Test"));
    assert_eq!(project.year, Some(2025));
}
