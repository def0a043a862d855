pub const DOCUMENTATION_CHECKLIST: &[&str] = &[
    "Test order form with clear medical indication",
    "Pathology report or clinical summary",
    "Physician's letter of medical necessity",
    "Z-code (MolDX) registration",
    "CPT code alignment based on panel size and type",
    "Proof of genetic counseling (for some germline panels)",
    "Previous negative/inconclusive results (if reflexed)",
];

#[derive(Debug, Clone, Copy)]
pub struct CptNote {
    pub code: &'static str,
    pub description: &'static str,
}

pub const CPT_NOTES: &[CptNote] = &[
    CptNote {
        code: "81450",
        description: "Targeted DNA/RNA analysis for solid tumors (<50 genes)",
    },
    CptNote {
        code: "81455",
        description: "Large NGS panel (>50 genes), most commonly used for CGPs",
    },
    CptNote {
        code: "81445",
        description: "Hereditary cancer panels (5–50 genes)",
    },
    CptNote {
        code: "81479",
        description: "Unlisted molecular pathology procedure (use with caution)",
    },
];

pub fn render_checklist() -> String {
    let mut out = String::new();
    out.push_str("Documentation Checklist\n");
    out.push_str("=======================\n");
    for item in DOCUMENTATION_CHECKLIST {
        out.push_str(&format!("[ ] {}\n", item));
    }
    out.push_str("\nCPT Code Notes\n");
    for note in CPT_NOTES {
        out.push_str(&format!("{}: {}\n", note.code, note.description));
    }
    out
}
