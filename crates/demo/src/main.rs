// File: crates/demo/src/main.rs
// Summary: Demo loads a dated CSV table and renders it as a multi-series chart to SVG (PNG with `raster`).

use anyhow::{Context, Result};
use chart_core::{ChartOptions, ChartPlotter};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod load;

#[derive(Debug, Parser)]
#[command(name = "chart-demo", about = "Render a dated CSV table as an SVG line chart")]
struct Args {
    /// CSV file; first row is the header, first column must be `Date`.
    input: PathBuf,
    /// Output path; defaults to target/out/chart_<stem>.svg
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// TOML file overriding canvas size and layout constants.
    #[arg(long)]
    layout: Option<PathBuf>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let options = resolve_options(&args)?;

    let table = load::load_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(rows = table.rows().len(), columns = table.width(), "loaded table");

    let mut plotter = ChartPlotter::new(options, table);
    plotter
        .generate()
        .with_context(|| format!("cannot chart '{}'", args.input.display()))?;
    if let Some(ds) = plotter.dataset() {
        for s in &ds.skipped {
            warn!(column = %s.label, row = s.row, value = %s.value, "column skipped: not all dates");
        }
    }

    let out = args.out.clone().unwrap_or_else(|| out_name(&args.input));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let svg = chart_render_svg::to_svg(&plotter)?;
    std::fs::write(&out, svg).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), "wrote svg");

    #[cfg(feature = "raster")]
    {
        let png = out.with_extension("png");
        std::fs::write(&png, chart_render_skia::to_png(&plotter)?)?;
        info!(path = %png.display(), "wrote png");
    }

    Ok(())
}

fn resolve_options(args: &Args) -> Result<ChartOptions> {
    let mut options = match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<ChartOptions>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => ChartOptions::default(),
    };
    if let Some(w) = args.width {
        options.width = w;
    }
    if let Some(h) = args.height {
        options.height = h;
    }
    Ok(options)
}

/// Produce output file name like target/out/chart_<stem>.svg
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.svg"))
}
