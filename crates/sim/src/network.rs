use queue_sweep_shared::error::SimError;
use queue_sweep_shared::result::SampleBatch;

use crate::stability::{check_servers, check_trials, network_utilization};
use crate::variate::{ShiftedGeometric, VariateSource};

/// Chain of identically loaded queues whose delays add up end to end.
///
/// Each stage is sampled independently of the others; the departure process
/// of one stage does not feed the next.
pub struct NetworkModel<'a> {
    source: &'a mut VariateSource,
}

impl<'a> NetworkModel<'a> {
    pub fn new(source: &'a mut VariateSource) -> Self {
        Self { source }
    }

    pub fn simulate(
        &mut self,
        load_factor: f64,
        server_count: usize,
        trials: usize,
    ) -> Result<SampleBatch, SimError> {
        check_trials(trials)?;
        check_servers(server_count)?;
        let rho = network_utilization(load_factor)?;
        let stage_delay = ShiftedGeometric::new(rho)?;

        let mut delays = Vec::with_capacity(trials);
        for _ in 0..trials {
            let mut total_delay = 0u64;
            for _ in 0..server_count {
                total_delay = total_delay.saturating_add(self.source.sample(&stage_delay));
            }
            delays.push(total_delay);
        }
        Ok(delays)
    }
}
