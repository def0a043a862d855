use crate::billing::roi::project;
use crate::model::selection::TestSelection;
use crate::panels::PanelDef;
use crate::report::{PanelRoi, RoiOutcome};

/// Carve-out ROI per selected panel. Empty unless the strategy is a carve-out.
/// Rejected inputs are reported per panel and never abort the run.
pub fn run_stage3(selection: &TestSelection, selected: &[&'static PanelDef]) -> Vec<PanelRoi> {
    if !selection.test_strategy.is_carve_out() {
        return Vec::new();
    }

    selected
        .iter()
        .map(|panel| {
            let inputs = selection.roi_inputs_for(panel);
            let outcome = match project(&inputs) {
                Ok(projection) => RoiOutcome::Projected(projection),
                Err(err) => {
                    tracing::warn!(panel = panel.name, "ROI rejected: {err}");
                    RoiOutcome::Rejected {
                        reason: err.to_string(),
                    }
                }
            };
            PanelRoi {
                panel_name: panel.name.to_string(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_roi.rs"]
mod tests;
