use crate::report::{
    PanelRoi, ReportContext, ReportRecord, RoiOutcome, format_break_even, format_money,
};

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    let selection = ctx.selection;

    out.push_str("NGS Reimbursement Report\n");
    out.push_str("========================\n\n");

    out.push_str("1. Selection\n");
    out.push_str(&format!("Test type: {}\n", selection.test_type.label()));
    out.push_str(&format!(
        "Panel source: {}\n",
        selection.panel_source.map(|s| s.label()).unwrap_or("any")
    ));
    out.push_str(&format!(
        "Test strategy: {}\n",
        selection.test_strategy.label()
    ));
    if !selection.zip_display().is_empty() {
        out.push_str(&format!("ZIP code: {}\n", selection.zip_display()));
    }
    out.push_str(&format!(
        "Panels offered: {} of {} available\n\n",
        ctx.n_offered, ctx.n_available
    ));

    out.push_str("2. Panel analysis\n");
    if ctx.records.is_empty() {
        out.push_str("No panels selected.\n");
    }
    for record in ctx.records {
        push_record(&mut out, record);
    }
    out.push('\n');

    out.push_str("3. Risk filter warnings\n");
    if ctx.warnings.is_empty() {
        out.push_str("None.\n");
    }
    for w in ctx.warnings {
        out.push_str(&format!("WARN {}\n", w.message()));
    }
    out.push('\n');

    if !ctx.roi.is_empty() {
        out.push_str("4. ROI simulation for carve-out\n");
        for roi in ctx.roi {
            push_roi(&mut out, roi);
        }
    }

    out
}

fn push_record(out: &mut String, r: &ReportRecord) {
    out.push_str(&format!("Analysis for {}\n", r.panel_name));
    out.push_str(&format!(
        "  {} Risk Level: {}\n",
        r.risk_level.badge(),
        r.risk_level.label()
    ));
    out.push_str(&format!("  Genes: {}\n", r.gene_count));
    out.push_str(&format!("  CPT Code Recommendation: {}\n", r.cpt_code));
    out.push_str(&format!("  Billing Note: {}\n", r.billing_note));
}

fn push_roi(out: &mut String, roi: &PanelRoi) {
    out.push_str(&format!("{}\n", roi.panel_name));
    match &roi.outcome {
        RoiOutcome::Projected(p) => {
            out.push_str(&format!(
                "  Backbone cost: {}, reimbursement per panel: {}\n",
                format_money(p.backbone_cost),
                format_money(p.reimbursement_per_panel)
            ));
            out.push_str("  # Panels\tRevenue ($)\tProfit ($)\n");
            for (n, revenue, profit) in p.rows() {
                out.push_str(&format!(
                    "  {}\t{}\t{}\n",
                    n,
                    format_money(revenue),
                    format_money(profit)
                ));
            }
            out.push_str(&format!(
                "  To break even, you need {} panel reports per sample.\n",
                format_break_even(p.break_even_panels)
            ));
            match p.first_profitable() {
                Some(n) => out.push_str(&format!("  No loss from {} panel reports.\n", n)),
                None => out.push_str(&format!(
                    "  Still at a loss after {} panel reports.\n",
                    p.max_panel_count
                )),
            }
        }
        RoiOutcome::Rejected { reason } => {
            out.push_str(&format!("  ROI not computed: {}\n", reason));
        }
    }
}
