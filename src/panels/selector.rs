use std::collections::BTreeSet;

use crate::model::selection::{PanelSource, TestType};
use crate::panels::defs::{PanelDef, builtin_panels};
use crate::panels::risk::{RiskLevel, annotate};

/// Panels offered for a test type and panel source, in catalog order.
pub fn available_panels(
    test_type: TestType,
    panel_source: Option<PanelSource>,
) -> Vec<&'static PanelDef> {
    let label = test_type.label();
    let catalog = builtin_panels().iter();

    if test_type.is_whole_sequencing() {
        let token = label.split(' ').next().unwrap_or(label);
        return catalog.filter(|p| p.name.contains(token)).collect();
    }

    let prefix = label.split(" –").next().unwrap_or(label);
    match panel_source {
        Some(PanelSource::Sophia) => catalog
            .filter(|p| p.name.contains(prefix) && !p.name.contains("General"))
            .collect(),
        Some(PanelSource::General) => catalog
            .filter(|p| p.name.contains(prefix) && p.name.contains("General"))
            .collect(),
        None => catalog.collect(),
    }
}

/// Keeps panels whose annotated risk level is allowed. An empty set keeps all.
pub fn filter_by_risk(
    panels: &[&'static PanelDef],
    allowed: &BTreeSet<RiskLevel>,
) -> Vec<&'static PanelDef> {
    if allowed.is_empty() {
        return panels.to_vec();
    }
    panels
        .iter()
        .copied()
        .filter(|p| allowed.contains(&annotate(p.name).0))
        .collect()
}
