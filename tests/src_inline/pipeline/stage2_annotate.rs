use super::*;
use crate::model::selection::{PanelSource, TestSelection, TestType};
use crate::panels::RiskLevel;
use crate::pipeline::stage1_select::run_stage1;

#[test]
fn test_record_fields() {
    let record = build_record("Solid Tumor – DNA Panel (325 genes)").unwrap();
    assert_eq!(record.gene_count, 325);
    assert_eq!(record.risk_level, RiskLevel::High);
    assert_eq!(record.cpt_code, "81455");
    assert!(record.billing_note.starts_with("Panels >300 genes"));
}

#[test]
fn test_record_defaults_for_uncurated_panel() {
    let record = build_record("General – Heme RNA Panel (<50 genes)").unwrap();
    assert_eq!(record.gene_count, 45);
    assert_eq!(record.risk_level, RiskLevel::NotSpecified);
    assert_eq!(record.cpt_code, "81450");
    assert_eq!(record.billing_note, "Standard documentation applies.");
}

#[test]
fn test_record_unknown_panel() {
    assert!(matches!(
        build_record("Unknown Panel XYZ"),
        Err(AdvisorError::UnknownPanel(_))
    ));
}

#[test]
fn test_filtered_out_selection_warns_and_stays() {
    let mut selection = TestSelection::new(TestType::Germline);
    selection.panel_source = Some(PanelSource::General);
    selection.risk_filter.insert(RiskLevel::High);
    selection.selected_panels = vec![
        "general_germline_medium".to_string(),
        "general_germline_large".to_string(),
    ];
    let stage1 = run_stage1(&selection).unwrap();
    let out = run_stage2(&stage1).unwrap();

    assert_eq!(out.records.len(), 2);
    assert_eq!(out.records[0].panel_name, "General – Germline Panel (50-100 genes)");
    assert_eq!(out.records[1].panel_name, "General – Germline Panel (>100 genes)");

    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].risk_level, RiskLevel::Medium);
    assert_eq!(
        out.warnings[0].message(),
        "General – Germline Panel (50-100 genes) does not meet current risk filter."
    );
}

#[test]
fn test_no_filter_no_warnings() {
    let mut selection = TestSelection::new(TestType::Wgs);
    selection.selected_panels = vec!["wgs_backbone".to_string()];
    let stage1 = run_stage1(&selection).unwrap();
    let out = run_stage2(&stage1).unwrap();
    assert!(out.warnings.is_empty());
    assert_eq!(out.records[0].risk_level, RiskLevel::VeryHigh);
}
