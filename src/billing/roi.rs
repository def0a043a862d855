use serde::Serialize;

use crate::error::AdvisorError;
use crate::model::selection::RoiInputs;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiProjection {
    pub backbone_cost: f64,
    pub reimbursement_per_panel: f64,
    pub max_panel_count: u32,
    /// Unrounded; callers format for display.
    pub break_even_panels: f64,
    pub revenue: Vec<f64>,
    pub profit: Vec<f64>,
}

impl RoiProjection {
    /// `(n, revenue, profit)` rows with `n` starting at 1.
    pub fn rows(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.revenue
            .iter()
            .zip(self.profit.iter())
            .enumerate()
            .map(|(i, (&rev, &profit))| (i as u32 + 1, rev, profit))
    }

    /// Smallest report count that is not loss-making, if within range.
    pub fn first_profitable(&self) -> Option<u32> {
        self.rows().find(|&(_, _, p)| p >= 0.0).map(|(n, _, _)| n)
    }
}

pub const MAX_PANEL_REPORTS: u32 = 10;

pub fn roi_projection(
    cost: f64,
    reimbursement: f64,
    max_panels: u32,
) -> Result<RoiProjection, AdvisorError> {
    if !reimbursement.is_finite() || reimbursement <= 0.0 {
        return Err(AdvisorError::InvalidInput(format!(
            "reimbursement per panel must be positive, got {reimbursement}"
        )));
    }
    if !(1..=MAX_PANEL_REPORTS).contains(&max_panels) {
        return Err(AdvisorError::InvalidInput(format!(
            "panel report count must be between 1 and {MAX_PANEL_REPORTS}, got {max_panels}"
        )));
    }
    if !cost.is_finite() {
        return Err(AdvisorError::InvalidInput(format!(
            "backbone cost must be finite, got {cost}"
        )));
    }

    let break_even_panels = cost / reimbursement;
    let revenue = (1..=max_panels)
        .map(|n| n as f64 * reimbursement)
        .collect::<Vec<_>>();
    let profit = revenue.iter().map(|rev| rev - cost).collect();

    Ok(RoiProjection {
        backbone_cost: cost,
        reimbursement_per_panel: reimbursement,
        max_panel_count: max_panels,
        break_even_panels,
        revenue,
        profit,
    })
}

pub fn project(inputs: &RoiInputs) -> Result<RoiProjection, AdvisorError> {
    roi_projection(
        inputs.backbone_cost,
        inputs.reimbursement_per_panel,
        inputs.max_panel_count,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/billing/roi.rs"]
mod tests;
