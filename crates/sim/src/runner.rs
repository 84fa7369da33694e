use rayon::prelude::*;
use tracing::{debug, info};

use queue_sweep_shared::config::{NetworkSweepConfig, QueueSweepConfig};
use queue_sweep_shared::error::SimError;
use queue_sweep_shared::result::{BatchSummary, ExperimentResult, SampleBatch};

use crate::network::NetworkModel;
use crate::queue::QueueModel;
use crate::variate::VariateSource;

/// Which model a sweep drives, with the parameters held fixed across design points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelKind {
    /// Design points are arrival rates.
    Queue { service_rate: f64 },
    /// Design points are load factors.
    Network { server_count: usize },
}

impl ModelKind {
    fn name(&self) -> &'static str {
        match self {
            ModelKind::Queue { .. } => "queue",
            ModelKind::Network { .. } => "network",
        }
    }
}

fn simulate_point(
    source: &mut VariateSource,
    design_point: f64,
    model: ModelKind,
    trials: usize,
) -> Result<SampleBatch, SimError> {
    let batch = match model {
        ModelKind::Queue { service_rate } => {
            QueueModel::new(source).simulate(design_point, service_rate, trials)?
        }
        ModelKind::Network { server_count } => {
            NetworkModel::new(source).simulate(design_point, server_count, trials)?
        }
    };

    if tracing::enabled!(tracing::Level::DEBUG) {
        let summary = BatchSummary::from_samples(&batch);
        debug!(
            model = model.name(),
            design_point,
            trials,
            mean = summary.mean,
            std_dev = summary.std_dev,
            "sampled design point"
        );
    }
    Ok(batch)
}

/// Sequential sweep over a single random stream.
pub struct ExperimentRunner {
    source: VariateSource,
}

impl ExperimentRunner {
    pub fn new(source: VariateSource) -> Self {
        Self { source }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(VariateSource::new(seed))
    }

    /// Samples every design point in the given order.
    ///
    /// The first invalid design point aborts the sweep and nothing is returned.
    pub fn run(
        &mut self,
        design_points: &[f64],
        model: ModelKind,
        trials: usize,
    ) -> Result<ExperimentResult, SimError> {
        info!(
            model = model.name(),
            design_points = design_points.len(),
            trials,
            "starting sweep"
        );

        let mut entries = Vec::with_capacity(design_points.len());
        for &point in design_points {
            let batch = simulate_point(&mut self.source, point, model, trials)?;
            entries.push((point, batch));
        }

        info!(model = model.name(), "sweep finished");
        Ok(ExperimentResult::from_entries(entries))
    }
}

pub fn run_queue_sweep(
    arrival_rates: &[f64],
    service_rate: f64,
    trials: usize,
    seed: u64,
) -> Result<ExperimentResult, SimError> {
    ExperimentRunner::with_seed(seed).run(arrival_rates, ModelKind::Queue { service_rate }, trials)
}

pub fn run_network_sweep(
    load_factors: &[f64],
    server_count: usize,
    trials: usize,
    seed: u64,
) -> Result<ExperimentResult, SimError> {
    ExperimentRunner::with_seed(seed).run(
        load_factors,
        ModelKind::Network { server_count },
        trials,
    )
}

pub fn run_queue_config(config: &QueueSweepConfig) -> Result<ExperimentResult, SimError> {
    run_queue_sweep(
        &config.arrival_rates,
        config.service_rate,
        config.trials,
        config.seed,
    )
}

pub fn run_network_config(config: &NetworkSweepConfig) -> Result<ExperimentResult, SimError> {
    run_network_sweep(
        &config.load_factors,
        config.server_count,
        config.trials,
        config.seed,
    )
}

/// Sweep on a worker pool. Design point `i` draws from its own stream seeded
/// with `seed + i`, so the output does not depend on the worker count.
pub fn run_sweep_parallel(
    design_points: &[f64],
    model: ModelKind,
    trials: usize,
    seed: u64,
    n_workers: Option<usize>,
) -> anyhow::Result<ExperimentResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?;

    info!(
        model = model.name(),
        design_points = design_points.len(),
        trials,
        workers = pool.current_num_threads(),
        "starting parallel sweep"
    );

    let batches: Result<Vec<SampleBatch>, SimError> = pool.install(|| {
        design_points
            .par_iter()
            .enumerate()
            .map(|(i, &point)| {
                let mut source = VariateSource::new(seed.wrapping_add(i as u64));
                simulate_point(&mut source, point, model, trials)
            })
            .collect()
    });

    let entries = design_points.iter().copied().zip(batches?).collect();
    Ok(ExperimentResult::from_entries(entries))
}
