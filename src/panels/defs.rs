use crate::error::AdvisorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCategory {
    SolidTumor,
    Hematologic,
    LiquidBiopsy,
    Germline,
    Exome,
    Genome,
}

impl PanelCategory {
    pub fn label(self) -> &'static str {
        match self {
            PanelCategory::SolidTumor => "solid tumor",
            PanelCategory::Hematologic => "hematologic",
            PanelCategory::LiquidBiopsy => "liquid biopsy",
            PanelCategory::Germline => "germline",
            PanelCategory::Exome => "exome",
            PanelCategory::Genome => "genome",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDef {
    pub id: &'static str,
    pub name: &'static str,
    pub category: PanelCategory,
    pub gene_count: u32,
}

const BUILTIN_PANELS: &[PanelDef] = &[
    PanelDef {
        id: "solid_tumor_dna",
        name: "Solid Tumor – DNA Panel (325 genes)",
        category: PanelCategory::SolidTumor,
        gene_count: 325,
    },
    PanelDef {
        id: "solid_tumor_rna",
        name: "Solid Tumor – RNA Panel (50 genes)",
        category: PanelCategory::SolidTumor,
        gene_count: 50,
    },
    PanelDef {
        id: "solid_tumor_dna_rna",
        name: "Solid Tumor – DNA + RNA Panel (375 genes)",
        category: PanelCategory::SolidTumor,
        gene_count: 375,
    },
    PanelDef {
        id: "heme_dna",
        name: "Hematologic – DNA Panel (65 genes)",
        category: PanelCategory::Hematologic,
        gene_count: 65,
    },
    PanelDef {
        id: "heme_rna",
        name: "Hematologic – RNA Panel (50 genes)",
        category: PanelCategory::Hematologic,
        gene_count: 50,
    },
    PanelDef {
        id: "heme_dna_rna",
        name: "Hematologic – DNA + RNA Panel (115 genes)",
        category: PanelCategory::Hematologic,
        gene_count: 115,
    },
    PanelDef {
        id: "liquid_biopsy_ctdna",
        name: "Liquid Biopsy – ctDNA (500 genes)",
        category: PanelCategory::LiquidBiopsy,
        gene_count: 500,
    },
    PanelDef {
        id: "germline_hereditary_cancer",
        name: "Germline – Hereditary Cancer Panel (47 genes)",
        category: PanelCategory::Germline,
        gene_count: 47,
    },
    PanelDef {
        id: "germline_cardio_metabolic",
        name: "Germline – Cardiovascular/Metabolic Panel (60 genes)",
        category: PanelCategory::Germline,
        gene_count: 60,
    },
    PanelDef {
        id: "germline_pediatric",
        name: "Germline – Pediatric/Undiagnosed Disease Panel (160 genes)",
        category: PanelCategory::Germline,
        gene_count: 160,
    },
    PanelDef {
        id: "wes_backbone",
        name: "WES – SOPHiA Exome Backbone (19000 genes)",
        category: PanelCategory::Exome,
        gene_count: 19_000,
    },
    PanelDef {
        id: "wgs_backbone",
        name: "WGS – SOPHiA Genome Backbone (20000+ genes)",
        category: PanelCategory::Genome,
        gene_count: 20_000,
    },
    PanelDef {
        id: "general_solid_dna",
        name: "General – Solid Tumor DNA Panel (<50 genes)",
        category: PanelCategory::SolidTumor,
        gene_count: 45,
    },
    PanelDef {
        id: "general_solid_rna",
        name: "General – Solid Tumor RNA Panel (<50 genes)",
        category: PanelCategory::SolidTumor,
        gene_count: 40,
    },
    PanelDef {
        id: "general_solid_dna_rna",
        name: "General – Solid Tumor DNA+RNA Panel (<100 genes)",
        category: PanelCategory::SolidTumor,
        gene_count: 90,
    },
    PanelDef {
        id: "general_heme_dna",
        name: "General – Heme DNA Panel (<50 genes)",
        category: PanelCategory::Hematologic,
        gene_count: 48,
    },
    PanelDef {
        id: "general_heme_rna",
        name: "General – Heme RNA Panel (<50 genes)",
        category: PanelCategory::Hematologic,
        gene_count: 45,
    },
    PanelDef {
        id: "general_heme_dna_rna",
        name: "General – Heme DNA+RNA Panel (<100 genes)",
        category: PanelCategory::Hematologic,
        gene_count: 95,
    },
    PanelDef {
        id: "general_germline_small",
        name: "General – Germline Panel (<50 genes)",
        category: PanelCategory::Germline,
        gene_count: 40,
    },
    PanelDef {
        id: "general_germline_medium",
        name: "General – Germline Panel (50-100 genes)",
        category: PanelCategory::Germline,
        gene_count: 75,
    },
    PanelDef {
        id: "general_germline_large",
        name: "General – Germline Panel (>100 genes)",
        category: PanelCategory::Germline,
        gene_count: 150,
    },
];

pub fn builtin_panels() -> &'static [PanelDef] {
    BUILTIN_PANELS
}

/// Gene count of the catalog panel with the given display name.
pub fn lookup(name: &str) -> Result<u32, AdvisorError> {
    builtin_panels()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.gene_count)
        .ok_or_else(|| AdvisorError::UnknownPanel(name.to_string()))
}

/// Resolves a panel by id or display name. Ids are matched case-insensitively.
pub fn find_panel(key: &str) -> Result<&'static PanelDef, AdvisorError> {
    let key = key.trim();
    builtin_panels()
        .iter()
        .find(|p| p.name == key || p.id.eq_ignore_ascii_case(key))
        .ok_or_else(|| AdvisorError::UnknownPanel(key.to_string()))
}
