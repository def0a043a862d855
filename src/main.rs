mod billing;
mod error;
mod logging;
mod model;
mod panels;
mod pipeline;
mod report;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::billing::cpt::GeneBand;
use crate::billing::roi::MAX_PANEL_REPORTS;
use crate::billing::workflow::{WorkflowInputs, compare_workflows, render_workflow_text};
use crate::error::AdvisorError;
use crate::model::checklist::render_checklist;
use crate::model::denial::{denial_rate, ranked_by_denial};
use crate::model::selection::{PanelSource, RoiInputs, TestSelection, TestStrategy, TestType};
use crate::panels::RiskLevel;
use crate::panels::selector::{available_panels, filter_by_risk};
use crate::pipeline::run_analysis;
use crate::pipeline::stage4_report::write_reports;
use crate::report::text::render_report_text;

#[derive(Debug, Parser)]
#[command(name = "kira-paneladvisor", version)]
#[command(about = "NGS panel billing, denial risk and carve-out ROI advisor", long_about = None)]
struct Cli {
    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List panels offered for a test type and panel source
    Panels(PanelsArgs),
    /// Build the billing report for a panel selection
    Analyze(AnalyzeArgs),
    /// Compare the dual Archer + DNA workflow against SOPHiA CGP v2
    Workflow(WorkflowArgs),
    /// Show illustrative NGS denial rates by state
    Denial {
        /// State name or two-letter code
        #[arg(long)]
        state: Option<String>,
    },
    /// Show the documentation checklist and CPT code notes
    Checklist,
}

#[derive(Debug, Args)]
struct PanelsArgs {
    #[arg(long, value_enum)]
    test_type: TestType,

    #[arg(long, value_enum)]
    source: Option<PanelSource>,

    /// Restrict to these risk levels (repeatable)
    #[arg(long = "risk", value_enum)]
    risk: Vec<RiskLevel>,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    #[arg(long, value_enum, required_unless_present = "selection")]
    test_type: Option<TestType>,

    #[arg(long, value_enum)]
    source: Option<PanelSource>,

    #[arg(long, value_enum, default_value = "panel-only")]
    strategy: TestStrategy,

    /// Shown in the report only
    #[arg(long)]
    zip: Option<String>,

    /// Panel id or display name, in report order (repeatable)
    #[arg(long = "panel")]
    panels: Vec<String>,

    #[arg(long = "risk", value_enum)]
    risk: Vec<RiskLevel>,

    #[arg(long, default_value_t = 1200.0, allow_negative_numbers = true)]
    backbone_cost: f64,

    #[arg(long, default_value_t = 400.0, allow_negative_numbers = true)]
    reimbursement: f64,

    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=MAX_PANEL_REPORTS as i64))]
    max_panels: u32,

    /// JSON selection file; replaces all selection flags
    #[arg(long, value_name = "FILE")]
    selection: Option<PathBuf>,

    /// Write ngs_full_report.csv, summary.json and report.txt here instead of printing
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct WorkflowArgs {
    #[arg(long, default_value_t = 650.0)]
    archer_rna_cost: f64,

    #[arg(long, default_value_t = 550.0)]
    dna_cost: f64,

    #[arg(long, default_value_t = 950.0)]
    sophia_cost: f64,

    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i32).range(1..=10))]
    dual_hours: i32,

    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i32).range(1..=10))]
    unified_hours: i32,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AdvisorError> {
    match command {
        Command::Panels(args) => {
            print!("{}", render_panel_list(&args));
        }
        Command::Analyze(args) => {
            let selection = build_selection(&args)?;
            let analysis = run_analysis(&selection)?;
            let ctx = analysis.context(&selection);
            match &args.out {
                Some(dir) => {
                    let written = write_reports(&ctx, dir)?;
                    println!("{}", written.csv.display());
                    println!("{}", written.summary.display());
                    println!("{}", written.report.display());
                }
                None => print!("{}", render_report_text(&ctx)),
            }
        }
        Command::Workflow(args) => {
            let comparison = compare_workflows(&WorkflowInputs {
                archer_rna_cost: args.archer_rna_cost,
                separate_dna_cost: args.dna_cost,
                sophia_cost: args.sophia_cost,
                dual_tech_hours: args.dual_hours,
                unified_tech_hours: args.unified_hours,
            });
            print!("{}", render_workflow_text(&comparison));
        }
        Command::Denial { state } => {
            println!("State\tDenial Rate (%)");
            match state {
                Some(state) => {
                    let row = denial_rate(&state).ok_or_else(|| {
                        AdvisorError::InvalidInput(format!("no denial data for state {state}"))
                    })?;
                    println!("{}\t{}", row.state, row.denial_rate_pct);
                }
                None => {
                    for row in ranked_by_denial() {
                        println!("{}\t{}", row.state, row.denial_rate_pct);
                    }
                }
            }
        }
        Command::Checklist => {
            print!("{}", render_checklist());
        }
    }
    Ok(())
}

fn render_panel_list(args: &PanelsArgs) -> String {
    let available = available_panels(args.test_type, args.source);
    let allowed = args.risk.iter().copied().collect::<BTreeSet<_>>();
    let offered = filter_by_risk(&available, &allowed);

    let mut out = String::from("id\tcategory\tgenes\tband\trisk\tcpt\tname\n");
    for p in offered {
        let (risk, _) = panels::annotate(p.name);
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            p.id,
            p.category.label(),
            p.gene_count,
            GeneBand::for_gene_count(p.gene_count).label(),
            risk.label(),
            billing::cpt_code(p.gene_count),
            p.name
        ));
    }
    out
}

fn build_selection(args: &AnalyzeArgs) -> Result<TestSelection, AdvisorError> {
    if let Some(path) = &args.selection {
        return load_selection(path);
    }

    let test_type = args
        .test_type
        .ok_or_else(|| AdvisorError::InvalidInput("missing --test-type".to_string()))?;
    let mut selection = TestSelection::new(test_type);
    selection.panel_source = args.source;
    selection.test_strategy = args.strategy;
    selection.zip_code = args.zip.clone().filter(|z| !z.trim().is_empty());
    selection.selected_panels = args.panels.clone();
    selection.risk_filter = args.risk.iter().copied().collect();
    selection.roi_defaults = RoiInputs {
        backbone_cost: args.backbone_cost,
        reimbursement_per_panel: args.reimbursement,
        max_panel_count: args.max_panels,
    };
    Ok(selection)
}

fn load_selection(path: &Path) -> Result<TestSelection, AdvisorError> {
    let text = std::fs::read_to_string(path)?;
    let selection: TestSelection = serde_json::from_str(&text)?;
    tracing::info!(path = %path.display(), "selection loaded");
    Ok(selection)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
