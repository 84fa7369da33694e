use queue_sweep_sim::runner::{self, ModelKind};

use super::SweepArgs;
use crate::output::QUEUE_REPORT;

pub fn run(service_rate: f64, sweep: &SweepArgs) -> anyhow::Result<()> {
    let arrival_rates = sweep.design_points();

    println!(
        "Running {} trials at {} arrival rates (service rate {:.2})...",
        sweep.trials,
        arrival_rates.len(),
        service_rate,
    );

    let start = std::time::Instant::now();
    let result = if sweep.parallel {
        runner::run_sweep_parallel(
            &arrival_rates,
            ModelKind::Queue { service_rate },
            sweep.trials,
            sweep.seed,
            sweep.n_workers(),
        )?
    } else {
        runner::run_queue_sweep(&arrival_rates, service_rate, sweep.trials, sweep.seed)?
    };
    let elapsed = start.elapsed();

    super::report(&result, &QUEUE_REPORT, sweep, elapsed)
}
