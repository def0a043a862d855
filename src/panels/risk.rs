use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_BILLING_NOTE: &str = "Standard documentation applies.";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    #[serde(alias = "Low")]
    Low,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "High")]
    High,
    #[serde(alias = "Very High")]
    VeryHigh,
    #[serde(alias = "Not Specified")]
    NotSpecified,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
            RiskLevel::NotSpecified => "Not Specified",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🔴",
            RiskLevel::VeryHigh => "🚨",
            RiskLevel::NotSpecified => "⚠️",
        }
    }
}

// Written as the display label so JSON matches the CSV export.
impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskEntry {
    pub panel_name: &'static str,
    pub risk_level: RiskLevel,
    pub billing_note: &'static str,
}

const CURATED_RISK: &[RiskEntry] = &[
    RiskEntry {
        panel_name: "General – Germline Panel (50-100 genes)",
        risk_level: RiskLevel::Medium,
        billing_note: "Consider billing with 81455. Denial risk may increase if policy requires <50 genes. Ensure strong documentation of medical necessity.",
    },
    RiskEntry {
        panel_name: "General – Germline Panel (>100 genes)",
        risk_level: RiskLevel::High,
        billing_note: "Most commercial payers do not cover panels >50 genes. Must use 81455. Recommend Z-code registration and MAC pre-check.",
    },
    RiskEntry {
        panel_name: "Solid Tumor – DNA Panel (325 genes)",
        risk_level: RiskLevel::High,
        billing_note: "Panels >300 genes typically require billing with 81455. Ensure strong rationale and clinical documentation to justify extent of profiling.",
    },
    RiskEntry {
        panel_name: "Solid Tumor – DNA + RNA Panel (375 genes)",
        risk_level: RiskLevel::High,
        billing_note: "High complexity assay – may not be reimbursed by all commercial payers. Use 81455 and document clearly why combined profiling was medically necessary.",
    },
    RiskEntry {
        panel_name: "Liquid Biopsy – ctDNA (500 genes)",
        risk_level: RiskLevel::VeryHigh,
        billing_note: "Very few payers reimburse for ctDNA panels >300 genes. Consider alternatives or seek pre-authorization. Billing typically requires 81455.",
    },
    RiskEntry {
        panel_name: "WES – SOPHiA Exome Backbone (19000 genes)",
        risk_level: RiskLevel::VeryHigh,
        billing_note: "Exome sequencing is rarely reimbursed as first-line test. Pairing with carved-out panels may help justify clinical utility and improve ROI.",
    },
    RiskEntry {
        panel_name: "WGS – SOPHiA Genome Backbone (20000+ genes)",
        risk_level: RiskLevel::VeryHigh,
        billing_note: "Whole genome sequencing is high-cost and low reimbursement unless bundled with additional diagnostic or carved-out reportable panels.",
    },
];

/// Risk level and billing note for a panel. Panels without curated guidance
/// fall back to `NotSpecified` and the standard note.
pub fn annotate(panel_name: &str) -> (RiskLevel, &'static str) {
    match CURATED_RISK.iter().find(|e| e.panel_name == panel_name) {
        Some(entry) => (entry.risk_level, entry.billing_note),
        None => (RiskLevel::NotSpecified, DEFAULT_BILLING_NOTE),
    }
}
