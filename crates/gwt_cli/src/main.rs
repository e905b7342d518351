//! GWT CLI - runs the demonstration scenarios and exits with the total
//! failure count.

use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use gwt_core::{DiagnosticSink, FileSink, RunSummary, StderrSink};
use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

mod demos;

#[derive(Parser)]
#[command(name = "gwt")]
#[command(about = "Fluent given/when/then scenario demos", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Append failure diagnostics to this file instead of stderr
    #[arg(long)]
    diagnostics: Option<PathBuf>,

    /// Include scenarios that fail on purpose, to show the diagnostic layout
    #[arg(long)]
    demo_failures: bool,

    /// Suppress the per-scenario listing
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.format != "text" && cli.format != "json" {
        bail!("unknown format '{}', expected 'text' or 'json'", cli.format);
    }

    let mut make_sink: Box<dyn FnMut() -> Box<dyn DiagnosticSink>> = match &cli.diagnostics {
        Some(path) => {
            let sink = Rc::new(RefCell::new(FileSink::create(path)?));
            Box::new(move || Box::new(sink.clone()) as Box<dyn DiagnosticSink>)
        }
        None => Box::new(|| Box::new(StderrSink) as Box<dyn DiagnosticSink>),
    };

    let mut summary = RunSummary::new();
    demos::run_all(&mut summary, &mut make_sink, cli.demo_failures);

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => print_text(&summary, cli.quiet),
    }

    Ok(summary.exit_code())
}

fn print_text(summary: &RunSummary, quiet: bool) {
    if !quiet {
        println!("{}", style("Scenarios:").bold());
        for outcome in &summary.outcomes {
            if outcome.failures == 0 {
                println!("  {} {}", style("✓").green(), outcome.name);
            } else {
                println!(
                    "  {} {} ({} failed)",
                    style("×").red(),
                    outcome.name,
                    style(outcome.failures).red()
                );
            }
        }
        println!();
    }

    if summary.passed() {
        println!(
            "{} {} scenarios, all assertions passed",
            style("✓").green(),
            summary.scenario_count()
        );
    } else {
        println!(
            "{} {} scenarios, {} failed assertions",
            style("×").red(),
            summary.scenario_count(),
            style(summary.total_failures).red().bold()
        );
    }
}
