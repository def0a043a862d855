use super::*;
use crate::model::selection::{PanelSource, TestType};
use crate::panels::RiskLevel;

fn germline_general() -> TestSelection {
    let mut selection = TestSelection::new(TestType::Germline);
    selection.panel_source = Some(PanelSource::General);
    selection
}

#[test]
fn test_selection_order_preserved() {
    let mut selection = germline_general();
    selection.selected_panels = vec![
        "general_germline_large".to_string(),
        "General – Germline Panel (<50 genes)".to_string(),
    ];
    let out = run_stage1(&selection).unwrap();
    assert_eq!(out.available.len(), 3);
    assert_eq!(out.offered.len(), 3);
    let ids = out.selected.iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids, vec!["general_germline_large", "general_germline_small"]);
}

#[test]
fn test_duplicate_selection_collapsed() {
    let mut selection = germline_general();
    selection.selected_panels = vec![
        "general_germline_small".to_string(),
        "General – Germline Panel (<50 genes)".to_string(),
    ];
    let out = run_stage1(&selection).unwrap();
    assert_eq!(out.selected.len(), 1);
}

#[test]
fn test_unknown_panel_rejected() {
    let mut selection = germline_general();
    selection.selected_panels = vec!["no_such_panel".to_string()];
    assert!(matches!(
        run_stage1(&selection),
        Err(AdvisorError::UnknownPanel(_))
    ));
}

#[test]
fn test_panel_outside_offer_rejected() {
    let mut selection = germline_general();
    selection.selected_panels = vec!["wes_backbone".to_string()];
    assert!(matches!(
        run_stage1(&selection),
        Err(AdvisorError::PanelNotOffered { .. })
    ));
}

#[test]
fn test_risk_filter_narrows_offer_not_selection() {
    let mut selection = germline_general();
    selection.risk_filter.insert(RiskLevel::High);
    selection.selected_panels = vec!["general_germline_small".to_string()];
    let out = run_stage1(&selection).unwrap();
    assert_eq!(out.offered.len(), 1);
    assert_eq!(out.selected.len(), 1);
    assert_eq!(out.selected[0].id, "general_germline_small");
}
