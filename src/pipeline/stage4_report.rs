use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AdvisorError;
use crate::report::ReportContext;
use crate::report::csv::{EXPORT_FILE_NAME, render_export_csv};
use crate::report::json::{build_summary, render_summary_json};
use crate::report::text::render_report_text;

#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub csv: PathBuf,
    pub summary: PathBuf,
    pub report: PathBuf,
}

pub fn write_reports(ctx: &ReportContext<'_>, out_dir: &Path) -> Result<WrittenReports, AdvisorError> {
    fs::create_dir_all(out_dir)?;

    let csv_path = out_dir.join(EXPORT_FILE_NAME);
    write_text(&csv_path, &render_export_csv(ctx.selection, ctx.records))?;

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(&build_summary(ctx))?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(ctx))?;

    tracing::info!(
        out_dir = %out_dir.display(),
        records = ctx.records.len(),
        "reports written"
    );

    Ok(WrittenReports {
        csv: csv_path,
        summary: summary_path,
        report: report_path,
    })
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
