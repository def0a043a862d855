use crate::error::AdvisorError;
use crate::model::selection::TestSelection;
use crate::panels::PanelDef;
use crate::panels::defs::find_panel;
use crate::panels::selector::{available_panels, filter_by_risk};

#[derive(Debug)]
pub struct Stage1Output {
    /// Offered for the test type and source, before the risk filter.
    pub available: Vec<&'static PanelDef>,
    /// Offered after the risk filter.
    pub offered: Vec<&'static PanelDef>,
    /// User selection in selection order, duplicates removed.
    pub selected: Vec<&'static PanelDef>,
}

pub fn run_stage1(selection: &TestSelection) -> Result<Stage1Output, AdvisorError> {
    let available = available_panels(selection.test_type, selection.panel_source);
    let offered = filter_by_risk(&available, &selection.risk_filter);
    tracing::info!(
        test_type = selection.test_type.label(),
        available = available.len(),
        offered = offered.len(),
        "panel selector resolved"
    );

    let mut selected: Vec<&'static PanelDef> = Vec::with_capacity(selection.selected_panels.len());
    for key in &selection.selected_panels {
        let panel = find_panel(key)?;
        if !available.iter().any(|p| p.id == panel.id) {
            return Err(AdvisorError::PanelNotOffered {
                panel: panel.name.to_string(),
                test_type: selection.test_type.label().to_string(),
            });
        }
        if selected.iter().any(|p| p.id == panel.id) {
            tracing::debug!(panel = panel.name, "duplicate selection ignored");
            continue;
        }
        selected.push(panel);
    }

    Ok(Stage1Output {
        available,
        offered,
        selected,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_select.rs"]
mod tests;
