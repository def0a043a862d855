use super::*;
use crate::billing::roi::roi_projection;
use crate::model::selection::{TestSelection, TestStrategy, TestType};
use crate::report::csv::render_export_csv;
use crate::report::text::render_report_text;

fn record() -> ReportRecord {
    ReportRecord {
        panel_name: "General – Germline Panel (>100 genes)".to_string(),
        gene_count: 150,
        risk_level: RiskLevel::High,
        cpt_code: "81455".to_string(),
        billing_note: "Most commercial payers do not cover panels >50 genes. Must use 81455.".to_string(),
    }
}

#[test]
fn test_formatting() {
    assert_eq!(format_money(250.0), "$250.00");
    assert_eq!(format_money(-800.0), "-$800.00");
    assert_eq!(format_break_even(3.0), "3.0");
    assert_eq!(format_break_even(10.0 / 3.0), "3.3");
}

#[test]
fn test_csv_repeats_constant_columns() {
    let mut selection = TestSelection::new(TestType::Germline);
    selection.zip_code = Some("10001".to_string());
    let records = vec![record(), record()];
    let csv = render_export_csv(&selection, &records);
    let rows = csv.lines().skip(1).collect::<Vec<_>>();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert!(row.starts_with("10001,Panel Only,Germline,"));
        assert!(row.ends_with(",81455,Most commercial payers do not cover panels >50 genes. Must use 81455."));
    }
}

#[test]
fn test_csv_empty_zip() {
    let selection = TestSelection::new(TestType::Wes);
    let csv = render_export_csv(&selection, &[record()]);
    assert!(csv.lines().nth(1).unwrap().starts_with(",Panel Only,WES (Whole Exome),"));
}

#[test]
fn test_text_report_roi_sections() {
    let mut selection = TestSelection::new(TestType::Wgs);
    selection.test_strategy = TestStrategy::CarveOutWgs;
    let records = vec![record()];
    let roi = vec![
        PanelRoi {
            panel_name: "A".to_string(),
            outcome: RoiOutcome::Projected(roi_projection(1200.0, 400.0, 5).unwrap()),
        },
        PanelRoi {
            panel_name: "B".to_string(),
            outcome: RoiOutcome::Rejected {
                reason: "invalid input: reimbursement per panel must be positive, got 0".to_string(),
            },
        },
    ];
    let ctx = ReportContext {
        tool_name: "kira-paneladvisor",
        tool_version: "0.1.0",
        selection: &selection,
        n_available: 1,
        n_offered: 1,
        records: &records,
        warnings: &[],
        roi: &roi,
    };
    let text = render_report_text(&ctx);
    assert!(text.contains("Test strategy: Carve-out from WGS"));
    assert!(text.contains("  3\t$1200.00\t$0.00"));
    assert!(text.contains("  1\t$400.00\t-$800.00"));
    assert!(text.contains("To break even, you need 3.0 panel reports per sample."));
    assert!(text.contains("No loss from 3 panel reports."));
    assert!(text.contains("ROI not computed: invalid input"));
    assert!(text.contains("3. Risk filter warnings\nNone."));
}
