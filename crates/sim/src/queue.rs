use queue_sweep_shared::error::SimError;
use queue_sweep_shared::result::SampleBatch;

use crate::stability::{check_trials, queue_utilization};
use crate::variate::{ShiftedGeometric, VariateSource};

/// Single M/M/1 queue sampled at steady state.
pub struct QueueModel<'a> {
    source: &'a mut VariateSource,
}

impl<'a> QueueModel<'a> {
    pub fn new(source: &'a mut VariateSource) -> Self {
        Self { source }
    }

    /// Draws `trials` independent customer counts at `rho = arrival_rate / service_rate`.
    ///
    /// Fails without touching the random stream when the queue is unstable.
    pub fn simulate(
        &mut self,
        arrival_rate: f64,
        service_rate: f64,
        trials: usize,
    ) -> Result<SampleBatch, SimError> {
        check_trials(trials)?;
        let rho = queue_utilization(arrival_rate, service_rate)?;
        let customers = ShiftedGeometric::new(rho)?;
        Ok((0..trials).map(|_| self.source.sample(&customers)).collect())
    }
}
