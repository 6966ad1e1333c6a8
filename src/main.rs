use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bim_extract::config::{ExportConfig, FailurePolicy};
use bim_extract::export::write_report;
use bim_extract::extract::Extractor;
use bim_extract::host::{Selection, StdoutNotifier};

#[derive(Parser, Debug)]
#[command(name = "bim-extract")]
#[command(about = "BIM Extract - write per-object JSON metadata for a host selection")]
#[command(version)]
struct Args {
    /// Path to the selection snapshot (JSON)
    #[arg(required = true)]
    selection: PathBuf,

    /// Config file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Keep exporting after a failed object
    #[arg(long)]
    keep_going: bool,

    /// Write a CSV batch report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Log each written file
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    if let Some(out) = args.out {
        config.output_dir = out;
    }
    if args.keep_going {
        config.on_error = FailurePolicy::Continue;
    }

    let selection = Selection::load(&args.selection)?;
    tracing::info!(objects = selection.len(), out = %config.output_dir.display(), "starting export");

    let summary = Extractor::new(config)
        .with_notifier(Box::new(StdoutNotifier))
        .run(selection.iter())?;

    if let Some(report_path) = &args.report {
        write_report(&summary, report_path)?;
        println!("Report written to: {}", report_path.display());
    }

    if !summary.failures.is_empty() {
        color_eyre::eyre::bail!("{} object(s) failed to export", summary.failures.len());
    }

    Ok(())
}
