// File: crates/benchplot/src/lib.rs
// Summary: Run pipeline for the benchplot binary: load every series, render, optionally show.

pub mod config;

use anyhow::{bail, Context, Result};
use benchplot_core::{load_all, render, ChartArtifact};
use tracing::{info, warn};

pub use config::{Cli, RunConfig, SeriesSpec};

/// Load all configured series, then render and persist the chart.
/// Nothing is written when any input fails to load or two series share a label.
pub fn run(cfg: &RunConfig) -> Result<ChartArtifact> {
    if let Some(label) = cfg.duplicate_label() {
        bail!("series label {label:?} is given more than once");
    }
    info!(series = cfg.series.len(), "loading benchmark results");
    let series = load_all(cfg.series.iter().map(|s| (&s.file, s.label.as_str())))
        .context("loading benchmark results")?;

    let artifact = render(series, &cfg.x_label, &cfg.y_label, &cfg.title, &cfg.output, &cfg.render)
        .with_context(|| format!("rendering {}", cfg.output.display()))?;
    println!("Wrote {} ({} bytes)", artifact.path.display(), artifact.bytes_written);

    if cfg.show {
        show(&artifact, &cfg.title);
    }
    Ok(artifact)
}

#[cfg(feature = "viewer")]
fn show(artifact: &ChartArtifact, title: &str) {
    // the chart is already on disk, so a viewer failure is not fatal
    if let Err(e) = benchplot_viewer::show(&artifact.frame, title) {
        warn!(error = %e, "could not display chart");
    }
}

#[cfg(not(feature = "viewer"))]
fn show(artifact: &ChartArtifact, _title: &str) {
    warn!(path = %artifact.path.display(), "built without the `viewer` feature; --show ignored");
}
