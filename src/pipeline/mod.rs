pub mod stage1_select;
pub mod stage2_annotate;
pub mod stage3_roi;
pub mod stage4_report;

use crate::error::AdvisorError;
use crate::model::selection::TestSelection;
use crate::report::{FilterWarning, PanelRoi, ReportContext, ReportRecord};

#[derive(Debug)]
pub struct Analysis {
    pub n_available: usize,
    pub n_offered: usize,
    pub records: Vec<ReportRecord>,
    pub warnings: Vec<FilterWarning>,
    pub roi: Vec<PanelRoi>,
}

impl Analysis {
    pub fn context<'a>(&'a self, selection: &'a TestSelection) -> ReportContext<'a> {
        ReportContext {
            tool_name: env!("CARGO_PKG_NAME"),
            tool_version: env!("CARGO_PKG_VERSION"),
            selection,
            n_available: self.n_available,
            n_offered: self.n_offered,
            records: &self.records,
            warnings: &self.warnings,
            roi: &self.roi,
        }
    }
}

pub fn run_analysis(selection: &TestSelection) -> Result<Analysis, AdvisorError> {
    let stage1 = stage1_select::run_stage1(selection)?;
    let stage2 = stage2_annotate::run_stage2(&stage1)?;
    let roi = stage3_roi::run_stage3(selection, &stage1.selected);

    Ok(Analysis {
        n_available: stage1.available.len(),
        n_offered: stage1.offered.len(),
        records: stage2.records,
        warnings: stage2.warnings,
        roi,
    })
}
