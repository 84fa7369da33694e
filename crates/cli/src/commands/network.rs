use queue_sweep_sim::runner::{self, ModelKind};

use super::SweepArgs;
use crate::output::NETWORK_REPORT;

pub fn run(servers: usize, sweep: &SweepArgs) -> anyhow::Result<()> {
    let load_factors = sweep.design_points();

    println!(
        "Running {} trials at {} load factors ({} servers)...",
        sweep.trials,
        load_factors.len(),
        servers,
    );

    let start = std::time::Instant::now();
    let result = if sweep.parallel {
        runner::run_sweep_parallel(
            &load_factors,
            ModelKind::Network {
                server_count: servers,
            },
            sweep.trials,
            sweep.seed,
            sweep.n_workers(),
        )?
    } else {
        runner::run_network_sweep(&load_factors, servers, sweep.trials, sweep.seed)?
    };
    let elapsed = start.elapsed();

    super::report(&result, &NETWORK_REPORT, sweep, elapsed)
}
