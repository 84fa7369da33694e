pub mod network;
pub mod queue;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use queue_sweep_shared::config::{
    linspace, DEFAULT_SEED, DESIGN_POINT_COUNT, DESIGN_POINT_END, DESIGN_POINT_START,
    TRIALS_PER_POINT,
};
use queue_sweep_shared::result::ExperimentResult;

use crate::output::ModelReport;
use crate::{output, plot};

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// First design point
    #[arg(long, default_value_t = DESIGN_POINT_START)]
    pub start: f64,
    /// Last design point
    #[arg(long, default_value_t = DESIGN_POINT_END)]
    pub end: f64,
    /// Number of evenly spaced design points
    #[arg(long, default_value_t = DESIGN_POINT_COUNT)]
    pub points: usize,
    /// Trials per design point
    #[arg(long, default_value_t = TRIALS_PER_POINT)]
    pub trials: usize,
    /// Seed of the random stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// Give every design point its own stream and run them on a worker pool
    #[arg(long)]
    pub parallel: bool,
    /// Number of parallel workers (0 = auto)
    #[arg(long, default_value = "0")]
    pub workers: usize,
    /// Write a box-plot to this path (.svg for SVG, PNG otherwise)
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

impl SweepArgs {
    pub fn design_points(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.points)
    }

    pub fn n_workers(&self) -> Option<usize> {
        if self.workers == 0 {
            None
        } else {
            Some(self.workers)
        }
    }
}

fn report(
    result: &ExperimentResult,
    model: &ModelReport,
    sweep: &SweepArgs,
    elapsed: std::time::Duration,
) -> anyhow::Result<()> {
    output::print_results(result, model, elapsed);

    if let Some(path) = &sweep.plot {
        plot::render_boxplot(result, model, path)
            .with_context(|| format!("failed to render box-plot to {}", path.display()))?;
        println!("Box-plot written to {}", path.display());
    }
    Ok(())
}
