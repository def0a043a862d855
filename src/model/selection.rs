use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::panels::PanelDef;
use crate::panels::risk::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    #[serde(alias = "Solid Tumor – DNA")]
    SolidTumorDna,
    #[serde(alias = "Solid Tumor – RNA")]
    SolidTumorRna,
    #[serde(alias = "Solid Tumor – DNA + RNA")]
    SolidTumorDnaRna,
    #[serde(alias = "Hematologic – DNA")]
    HematologicDna,
    #[serde(alias = "Hematologic – RNA")]
    HematologicRna,
    #[serde(alias = "Hematologic – DNA + RNA")]
    HematologicDnaRna,
    #[serde(alias = "Liquid Biopsy")]
    LiquidBiopsy,
    #[serde(alias = "Germline")]
    Germline,
    #[serde(alias = "WES (Whole Exome)")]
    Wes,
    #[serde(alias = "WGS (Whole Genome)")]
    Wgs,
}

impl TestType {
    pub fn label(self) -> &'static str {
        match self {
            TestType::SolidTumorDna => "Solid Tumor – DNA",
            TestType::SolidTumorRna => "Solid Tumor – RNA",
            TestType::SolidTumorDnaRna => "Solid Tumor – DNA + RNA",
            TestType::HematologicDna => "Hematologic – DNA",
            TestType::HematologicRna => "Hematologic – RNA",
            TestType::HematologicDnaRna => "Hematologic – DNA + RNA",
            TestType::LiquidBiopsy => "Liquid Biopsy",
            TestType::Germline => "Germline",
            TestType::Wes => "WES (Whole Exome)",
            TestType::Wgs => "WGS (Whole Genome)",
        }
    }

    pub fn is_whole_sequencing(self) -> bool {
        matches!(self, TestType::Wes | TestType::Wgs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PanelSource {
    #[serde(alias = "SOPHiA Genetics")]
    Sophia,
    #[serde(alias = "General Category")]
    General,
}

impl PanelSource {
    pub fn label(self) -> &'static str {
        match self {
            PanelSource::Sophia => "SOPHiA Genetics",
            PanelSource::General => "General Category",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TestStrategy {
    #[default]
    #[serde(alias = "Panel Only")]
    PanelOnly,
    #[serde(alias = "Carve-out from WES")]
    CarveOutWes,
    #[serde(alias = "Carve-out from WGS")]
    CarveOutWgs,
    #[serde(alias = "Carve-out from Large Panel")]
    CarveOutLargePanel,
}

impl TestStrategy {
    pub fn label(self) -> &'static str {
        match self {
            TestStrategy::PanelOnly => "Panel Only",
            TestStrategy::CarveOutWes => "Carve-out from WES",
            TestStrategy::CarveOutWgs => "Carve-out from WGS",
            TestStrategy::CarveOutLargePanel => "Carve-out from Large Panel",
        }
    }

    pub fn is_carve_out(self) -> bool {
        self.label().starts_with("Carve-out")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub backbone_cost: f64,
    pub reimbursement_per_panel: f64,
    pub max_panel_count: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            backbone_cost: 1200.0,
            reimbursement_per_panel: 400.0,
            max_panel_count: 5,
        }
    }
}

/// One analysis request. Built from CLI flags or a JSON selection file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSelection {
    pub test_type: TestType,
    #[serde(default)]
    pub panel_source: Option<PanelSource>,
    #[serde(default)]
    pub test_strategy: TestStrategy,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub selected_panels: Vec<String>,
    #[serde(default)]
    pub risk_filter: BTreeSet<RiskLevel>,
    #[serde(default)]
    pub roi_defaults: RoiInputs,
    /// Keyed by panel id or display name.
    #[serde(default)]
    pub roi_overrides: BTreeMap<String, RoiInputs>,
}

impl TestSelection {
    pub fn new(test_type: TestType) -> Self {
        Self {
            test_type,
            panel_source: None,
            test_strategy: TestStrategy::PanelOnly,
            zip_code: None,
            selected_panels: Vec::new(),
            risk_filter: BTreeSet::new(),
            roi_defaults: RoiInputs::default(),
            roi_overrides: BTreeMap::new(),
        }
    }

    pub fn roi_inputs_for(&self, panel: &PanelDef) -> RoiInputs {
        self.roi_overrides
            .get(panel.id)
            .or_else(|| self.roi_overrides.get(panel.name))
            .copied()
            .unwrap_or(self.roi_defaults)
    }

    pub fn zip_display(&self) -> &str {
        self.zip_code.as_deref().unwrap_or("")
    }
}
