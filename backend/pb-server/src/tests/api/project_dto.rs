use crate::ProjectDto;

use pb_core::Project;

#[test]
fn test_plain_dto_omits_final_budget_ttd_key() {
    let json = serde_json::to_value(ProjectDto::plain(Project::new(3))).unwrap();

    assert_eq!(json["projectId"], 3);
    assert!(json.get("finalBudgetTtd").is_none());
    // Unset stored fields still serialize
    assert!(json["finalBudgetUsd"].is_null());
    assert!(json.get("projectName").is_some());
}

#[test]
fn test_failed_conversion_renders_null_not_absent() {
    let json = serde_json::to_value(ProjectDto::with_ttd(Project::new(3), None)).unwrap();

    assert!(json.get("finalBudgetTtd").is_some());
    assert!(json["finalBudgetTtd"].is_null());
}

#[test]
fn test_converted_amount_renders_number() {
    let json = serde_json::to_value(ProjectDto::with_ttd(Project::new(3), Some(12.5))).unwrap();

    assert_eq!(json["finalBudgetTtd"], 12.5);
}
