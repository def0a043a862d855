#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneBand {
    UpTo50,
    From51To100,
    Over100,
}

impl GeneBand {
    pub fn for_gene_count(gene_count: u32) -> Self {
        if gene_count <= 50 {
            GeneBand::UpTo50
        } else if gene_count <= 100 {
            GeneBand::From51To100
        } else {
            GeneBand::Over100
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GeneBand::UpTo50 => "<50",
            GeneBand::From51To100 => "50-100",
            GeneBand::Over100 => ">100",
        }
    }
}

// The two upper bands share a code; kept as separate bands on purpose.
const CPT_MAPPING: &[(GeneBand, &str)] = &[
    (GeneBand::UpTo50, "81450"),
    (GeneBand::From51To100, "81455"),
    (GeneBand::Over100, "81455"),
];

pub fn cpt_for_band(band: GeneBand) -> &'static str {
    CPT_MAPPING
        .iter()
        .find(|(b, _)| *b == band)
        .map(|(_, code)| *code)
        .unwrap_or("81455")
}

pub fn cpt_code(gene_count: u32) -> &'static str {
    cpt_for_band(GeneBand::for_gene_count(gene_count))
}

#[cfg(test)]
#[path = "../../tests/src_inline/billing/cpt.rs"]
mod tests;
