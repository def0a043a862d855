use serde::Serialize;

/// Per-sample cost saved by replacing the dual Archer RNA + DNA workflow with
/// the unified SOPHiA CGP assay. Positive means the unified workflow is cheaper.
pub fn workflow_comparison(archer_rna_cost: f64, separate_dna_cost: f64, sophia_cost: f64) -> f64 {
    (archer_rna_cost + separate_dna_cost) - sophia_cost
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkflowInputs {
    pub archer_rna_cost: f64,
    pub separate_dna_cost: f64,
    pub sophia_cost: f64,
    pub dual_tech_hours: i32,
    pub unified_tech_hours: i32,
}

impl Default for WorkflowInputs {
    fn default() -> Self {
        Self {
            archer_rna_cost: 650.0,
            separate_dna_cost: 550.0,
            sophia_cost: 950.0,
            dual_tech_hours: 4,
            unified_tech_hours: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkflowComparison {
    pub dual_total: f64,
    pub sophia_cost: f64,
    pub savings: f64,
    pub hours_saved: i32,
}

impl WorkflowComparison {
    pub fn unified_is_cheaper(&self) -> bool {
        self.savings > 0.0
    }

    pub fn verdict(&self) -> String {
        if self.unified_is_cheaper() {
            format!(
                "SOPHiA CGP v2 reduces per-sample cost by ${:.2}",
                self.savings
            )
        } else {
            format!(
                "SOPHiA CGP v2 is currently more expensive by ${:.2}",
                self.sophia_cost - self.dual_total
            )
        }
    }
}

pub fn compare_workflows(inputs: &WorkflowInputs) -> WorkflowComparison {
    WorkflowComparison {
        dual_total: inputs.archer_rna_cost + inputs.separate_dna_cost,
        sophia_cost: inputs.sophia_cost,
        savings: workflow_comparison(
            inputs.archer_rna_cost,
            inputs.separate_dna_cost,
            inputs.sophia_cost,
        ),
        hours_saved: inputs.dual_tech_hours - inputs.unified_tech_hours,
    }
}

pub fn render_workflow_text(c: &WorkflowComparison) -> String {
    let mut out = String::new();
    out.push_str("Lab Workflow Optimization\n");
    out.push_str("=========================\n");
    out.push_str(&format!("Current dual assay cost: ${:.2}\n", c.dual_total));
    out.push_str(&format!("SOPHiA CGP v2 cost: ${:.2}\n", c.sophia_cost));
    out.push_str(&format!("{}\n", c.verdict()));
    out.push_str(&format!(
        "Estimated tech time saved per sample: {} hours\n",
        c.hours_saved
    ));
    out
}
