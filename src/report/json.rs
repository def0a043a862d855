use serde::Serialize;

use crate::report::{FilterWarning, PanelRoi, ReportContext, ReportRecord};

#[derive(Debug, Serialize)]
pub struct ToolMeta<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SelectionSummary<'a> {
    pub zip_code: &'a str,
    pub test_strategy: &'a str,
    pub test_type: &'a str,
    pub panel_source: Option<&'a str>,
    pub risk_filter: Vec<&'a str>,
    pub carve_out: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryData<'a> {
    pub tool: ToolMeta<'a>,
    pub selection: SelectionSummary<'a>,
    pub n_available: usize,
    pub n_offered: usize,
    pub records: &'a [ReportRecord],
    pub warnings: Vec<String>,
    pub roi: &'a [PanelRoi],
}

pub fn build_summary<'a>(ctx: &ReportContext<'a>) -> SummaryData<'a> {
    let selection = ctx.selection;
    SummaryData {
        tool: ToolMeta {
            name: ctx.tool_name,
            version: ctx.tool_version,
        },
        selection: SelectionSummary {
            zip_code: selection.zip_display(),
            test_strategy: selection.test_strategy.label(),
            test_type: selection.test_type.label(),
            panel_source: selection.panel_source.map(|s| s.label()),
            risk_filter: selection.risk_filter.iter().map(|r| r.label()).collect(),
            carve_out: selection.test_strategy.is_carve_out(),
        },
        n_available: ctx.n_available,
        n_offered: ctx.n_offered,
        records: ctx.records,
        warnings: ctx.warnings.iter().map(FilterWarning::message).collect(),
        roi: ctx.roi,
    }
}

pub fn render_summary_json(data: &SummaryData<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}
