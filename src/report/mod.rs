pub mod csv;
pub mod json;
pub mod text;

use serde::Serialize;

use crate::billing::RoiProjection;
use crate::model::selection::TestSelection;
use crate::panels::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    pub panel_name: String,
    pub gene_count: u32,
    pub risk_level: RiskLevel,
    pub cpt_code: String,
    pub billing_note: String,
}

/// A selected panel the active risk filter would not have offered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterWarning {
    pub panel_name: String,
    pub risk_level: RiskLevel,
}

impl FilterWarning {
    pub fn message(&self) -> String {
        format!("{} does not meet current risk filter.", self.panel_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoiOutcome {
    Projected(RoiProjection),
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRoi {
    pub panel_name: String,
    pub outcome: RoiOutcome,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub tool_name: &'a str,
    pub tool_version: &'a str,
    pub selection: &'a TestSelection,
    pub n_available: usize,
    pub n_offered: usize,
    pub records: &'a [ReportRecord],
    pub warnings: &'a [FilterWarning],
    pub roi: &'a [PanelRoi],
}

pub fn format_money(v: f64) -> String {
    if v < 0.0 {
        format!("-${:.2}", -v)
    } else {
        format!("${:.2}", v)
    }
}

pub fn format_break_even(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
