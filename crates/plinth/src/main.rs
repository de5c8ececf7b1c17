//! Plinth CLI - templated static website generator.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use plinth_site::{BuildConfig, SiteBuilder};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "plinth")]
#[command(about = "Templated static website generator")]
#[command(version)]
struct Cli {
    /// Input directory containing config.json, templates/ and optional static/
    input_dir: PathBuf,

    /// Output directory (defaults to <input_dir>/html); must not already exist
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print one line per copied asset and rendered page
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    if !cli.input_dir.is_dir() {
        bail!("input directory does not exist: {}", cli.input_dir.display());
    }

    let result = SiteBuilder::new(BuildConfig {
        input_dir: cli.input_dir,
        output: cli.output,
    })
    .build()?;

    tracing::info!(
        "Built {} page(s) and copied {} asset(s) in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
