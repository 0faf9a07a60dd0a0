//! # Fulcrum CLI
//!
//! Resolves a beam document and prints its reactions and internal forces.
//!
//! ```text
//! beam_cli [DOCUMENT.json] [--out REPORT.json] [--integrated]
//! ```
//!
//! Without a document the built-in demo beam is analyzed. Set `RUST_LOG=debug`
//! to see the solver's running sums.

use std::path::PathBuf;
use std::process::ExitCode;

use beam_core::analysis::{AnalysisReport, ReactionKind};
use beam_core::beam::SupportType;
use beam_core::document::{BeamDocument, BeamInput, DistributedInput, ForceInput};
use beam_core::errors::{BeamError, BeamResult};
use beam_core::file_io::{load_document, save_report};
use beam_core::loads::{Distribution, ResultantRule};

const USAGE: &str = "usage: beam_cli [DOCUMENT.json] [--out REPORT.json] [--integrated]";

struct Args {
    document: Option<PathBuf>,
    out: Option<PathBuf>,
    integrated: bool,
}

/// `Ok(None)` when help was requested
fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Option<Args>, String> {
    let mut args = Args {
        document: None,
        out: None,
        integrated: false,
    };

    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let path = iter.next().ok_or("--out needs a path")?;
                args.out = Some(PathBuf::from(path));
            }
            "--integrated" => args.integrated = true,
            "--help" | "-h" => return Ok(None),
            other if other.starts_with('-') => return Err(format!("unknown option: {}", other)),
            other => args.document = Some(PathBuf::from(other)),
        }
    }

    Ok(Some(args))
}

/// Simply supported 10 m beam: 10 kN at 8 m, 20 kN/m over the first 4 m
fn demo_document() -> BeamDocument {
    let mut beam = BeamInput::new(SupportType::SimplySupported, 10.0, 1.0);
    beam.forces.push(ForceInput {
        fx: 0.0,
        fy: -10_000.0,
        x: 8.0,
        y: 0.0,
        note: String::new(),
    });
    beam.distributed.push(DistributedInput {
        distribution: Distribution::uniform(-20_000.0),
        x: 2.0,
        y: 0.0,
        length: 4.0,
        note: String::new(),
    });
    BeamDocument::new("Demo", beam)
}

fn run(args: &Args) -> BeamResult<AnalysisReport> {
    let mut document = match &args.document {
        Some(path) => load_document(path)?,
        None => {
            println!("No document given. Running the demo beam...");
            println!();
            demo_document()
        }
    };

    if args.integrated {
        document.settings.resultant_rule = ResultantRule::integrated();
    }

    let report = document.report()?;

    if let Some(out) = &args.out {
        save_report(&report, out)?;
    }

    Ok(report)
}

fn print_report(report: &AnalysisReport) {
    let label = if report.label.is_empty() { "(unnamed)" } else { report.label.as_str() };
    let fixed_moments = report
        .reactions
        .iter()
        .filter(|r| r.kind == ReactionKind::FixedEndMoment)
        .count();
    let reaction_forces = report.reactions.len() - fixed_moments;

    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS: {}", label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Beam:");
    println!("  Support:  {}", report.support);
    println!("  Length:   {}", report.length);
    println!(
        "  Loads:    {} forces, {} distributed, {} moments",
        report.forces.len() - reaction_forces,
        report.distributed.len(),
        report.moments.len() - fixed_moments,
    );
    for load in report.distributed.iter().filter(|d| !d.active) {
        println!(
            "  Skipped:  {} over [{}, {}] (outside span)",
            load.label, load.start, load.end
        );
    }
    println!();
    println!("Applied resultants:");
    println!("  ΣFx = {:.3}", report.resultants.force_x);
    println!("  ΣFy = {:.3}", report.resultants.force_y);
    println!("  ΣM  = {:.3} (clockwise +)", report.resultants.moment);
    println!();
    println!("Reactions:");
    if report.reactions.is_empty() {
        println!("  none (already in equilibrium)");
    }
    for reaction in &report.reactions {
        println!(
            "  {:<3} = {:>14.3} at x = {}",
            reaction.kind.label(), reaction.value, reaction.position.x
        );
    }
    println!();
    let extrema = &report.diagram.extrema;
    println!("Internal forces:");
    println!("  V_peak = {:.3} at x = {:.3}", extrema.peak_shear, extrema.peak_shear_position);
    println!("  M_max  = {:.3} at x = {:.3}", extrema.max_moment, extrema.max_moment_position);
    println!("  M_min  = {:.3} at x = {:.3}", extrema.min_moment, extrema.min_moment_position);
    println!();
    println!("  {:>10} {:>16} {:>16}", "x", "V(x)", "M(x)");
    let step = (report.diagram.shear.len() / 10).max(1);
    for (v, m) in report.diagram.shear.iter().zip(&report.diagram.moment).step_by(step) {
        println!("  {:>10.3} {:>16.3} {:>16.3}", v.0, v.1, m.1);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  Residuals: ΣFx = {:.2e}, ΣFy = {:.2e}, ΣM = {:.2e}",
        report.residuals.force_x, report.residuals.force_y, report.residuals.moment
    );
    println!("═══════════════════════════════════════");
}

fn print_error(e: &BeamError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(report) => {
            print_report(&report);
            if let Some(out) = &args.out {
                log::info!("report written to {}", out.display());
                println!();
                println!("Report written to {}", out.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(matches!(parse_args(argv(&["--help"])), Ok(None)));
        assert!(matches!(parse_args(argv(&["beam.json", "-h"])), Ok(None)));
    }

    #[test]
    fn test_parse_document_and_flags() {
        let args = parse_args(argv(&["beam.json", "--out", "report.json", "--integrated"]))
            .unwrap()
            .unwrap();
        assert_eq!(args.document, Some(PathBuf::from("beam.json")));
        assert_eq!(args.out, Some(PathBuf::from("report.json")));
        assert!(args.integrated);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(argv(&["--out"])).is_err());
        assert!(parse_args(argv(&["--verbose"])).is_err());
    }

    #[test]
    fn test_demo_document_resolves() {
        let report = demo_document().report().unwrap();
        assert_eq!(report.reactions.len(), 2);
        assert!(report.residuals.is_balanced(1e-6));
    }
}
