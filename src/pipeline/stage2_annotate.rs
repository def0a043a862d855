use crate::billing::cpt_code;
use crate::error::AdvisorError;
use crate::panels::{PanelDef, annotate, lookup};
use crate::pipeline::stage1_select::Stage1Output;
use crate::report::{FilterWarning, ReportRecord};

#[derive(Debug)]
pub struct Stage2Output {
    pub records: Vec<ReportRecord>,
    pub warnings: Vec<FilterWarning>,
}

pub fn run_stage2(stage1: &Stage1Output) -> Result<Stage2Output, AdvisorError> {
    let mut records = Vec::with_capacity(stage1.selected.len());
    let mut warnings = Vec::new();

    for panel in &stage1.selected {
        let record = build_record(panel.name)?;
        if !is_offered(panel, &stage1.offered) {
            let warning = FilterWarning {
                panel_name: record.panel_name.clone(),
                risk_level: record.risk_level,
            };
            tracing::warn!("{}", warning.message());
            warnings.push(warning);
        }
        records.push(record);
    }

    Ok(Stage2Output { records, warnings })
}

pub fn build_record(panel_name: &str) -> Result<ReportRecord, AdvisorError> {
    let gene_count = lookup(panel_name)?;
    let (risk_level, billing_note) = annotate(panel_name);
    Ok(ReportRecord {
        panel_name: panel_name.to_string(),
        gene_count,
        risk_level,
        cpt_code: cpt_code(gene_count).to_string(),
        billing_note: billing_note.to_string(),
    })
}

fn is_offered(panel: &PanelDef, offered: &[&'static PanelDef]) -> bool {
    offered.iter().any(|p| p.id == panel.id)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_annotate.rs"]
mod tests;
