// File: crates/bench-plot/src/main.rs
// Summary: Loads CRDT benchmark results and shows average time per change against total changes.

use anyhow::{Context, Result};
use bench_plot::{default_image_path, display, loader, plot, Presented};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "crdt-bench-plot")]
#[command(about = "Plot CRDT benchmark results (average time per change vs total changes)", long_about = None)]
struct Args {
    /// Benchmark results CSV (header row, then `changes,avg_ms` rows)
    #[arg(default_value = loader::DEFAULT_INPUT)]
    input: PathBuf,

    /// Image written when no window can be opened [default: INPUT with a .png extension, or .chart.png for a .png INPUT]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the image instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Color theme (light or dark)
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    info!(input = %args.input.display(), "loading benchmark results");
    let samples = loader::load(&args.input)
        .with_context(|| format!("failed to load benchmark results from '{}'", args.input.display()))?;
    info!(samples = samples.len(), "loaded benchmark results");

    let chart = plot::build_chart(&samples);
    let opts = plot::render_options(chart_core::theme::find(&args.theme));
    let fallback = args.output.unwrap_or_else(|| default_image_path(&args.input));

    match display::present(&chart, &opts, &fallback, args.headless).context("failed to display chart")? {
        Presented::Window => info!("chart window closed"),
        Presented::File(path) => println!("Wrote {}", path.display()),
    }
    Ok(())
}
