use super::*;
use crate::model::selection::{PanelSource, TestSelection, TestStrategy, TestType};
use crate::panels::RiskLevel;
use crate::pipeline::run_analysis;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_advisor_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn build_selection() -> TestSelection {
    let mut selection = TestSelection::new(TestType::Germline);
    selection.panel_source = Some(PanelSource::General);
    selection.test_strategy = TestStrategy::CarveOutLargePanel;
    selection.zip_code = Some("94107".to_string());
    selection.risk_filter.insert(RiskLevel::High);
    selection.selected_panels = vec![
        "general_germline_large".to_string(),
        "general_germline_medium".to_string(),
    ];
    selection
}

#[test]
fn test_csv_columns_and_rows() {
    let selection = build_selection();
    let analysis = run_analysis(&selection).unwrap();
    let dir = make_temp_dir();
    let written = write_reports(&analysis.context(&selection), &dir).unwrap();

    let text = std::fs::read_to_string(&written.csv).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ZIP Code,Test Strategy,Test Type,Panel,Genes,Risk,CPT Code,Billing Guidance"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with(
        "94107,Carve-out from Large Panel,Germline,General – Germline Panel (>100 genes),150,High,81455,"
    ));
    let second = lines.next().unwrap();
    assert!(second.contains(",75,Medium,81455,"));
    assert!(lines.next().is_none());
}

#[test]
fn test_summary_json_schema() {
    let selection = build_selection();
    let analysis = run_analysis(&selection).unwrap();
    let dir = make_temp_dir();
    let written = write_reports(&analysis.context(&selection), &dir).unwrap();

    let text = std::fs::read_to_string(&written.summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["tool"]["name"], "kira-paneladvisor");
    assert_eq!(value["selection"]["zip_code"], "94107");
    assert_eq!(value["selection"]["carve_out"], true);
    assert_eq!(value["records"].as_array().unwrap().len(), 2);
    assert_eq!(value["records"][0]["risk_level"], "High");
    assert_eq!(value["records"][1]["risk_level"], "Medium");
    assert_eq!(value["selection"]["risk_filter"][0], "High");
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
    assert_eq!(value["roi"][0]["outcome"]["status"], "projected");
    assert_eq!(value["roi"][0]["outcome"]["break_even_panels"], 3.0);
}

#[test]
fn test_report_text_written() {
    let selection = build_selection();
    let analysis = run_analysis(&selection).unwrap();
    let dir = make_temp_dir();
    let written = write_reports(&analysis.context(&selection), &dir).unwrap();

    let text = std::fs::read_to_string(&written.report).unwrap();
    assert!(text.contains("🔴 Risk Level: High"));
    assert!(text.contains("To break even, you need 3.0 panel reports per sample."));
    assert!(text.contains("WARN General – Germline Panel (50-100 genes) does not meet current risk filter."));
}

#[test]
fn test_deterministic_output() {
    let selection = build_selection();
    let analysis = run_analysis(&selection).unwrap();
    let dir = make_temp_dir();
    let ctx = analysis.context(&selection);
    write_reports(&ctx, &dir).unwrap();
    let a = std::fs::read_to_string(dir.join("summary.json")).unwrap();
    write_reports(&ctx, &dir).unwrap();
    let b = std::fs::read_to_string(dir.join("summary.json")).unwrap();
    assert_eq!(a, b);
}
