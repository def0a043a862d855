use crate::model::selection::TestSelection;
use crate::report::ReportRecord;

pub const EXPORT_FILE_NAME: &str = "ngs_full_report.csv";

pub const EXPORT_COLUMNS: [&str; 8] = [
    "ZIP Code",
    "Test Strategy",
    "Test Type",
    "Panel",
    "Genes",
    "Risk",
    "CPT Code",
    "Billing Guidance",
];

pub fn render_export_csv(selection: &TestSelection, records: &[ReportRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, EXPORT_COLUMNS.iter().copied());

    let zip = selection.zip_display();
    let strategy = selection.test_strategy.label();
    let test_type = selection.test_type.label();
    for r in records {
        let genes = r.gene_count.to_string();
        push_row(
            &mut out,
            [
                zip,
                strategy,
                test_type,
                r.panel_name.as_str(),
                genes.as_str(),
                r.risk_level.label(),
                r.cpt_code.as_str(),
                r.billing_note.as_str(),
            ],
        );
    }
    out
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

// RFC 4180 quoting.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
