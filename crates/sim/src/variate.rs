//! Geometric variates for queue-length sampling.
//!
//! Two numberings of the geometric law are in play. `draw_geometric` counts
//! failures before the first success (support `0, 1, 2, ...`). The customer
//! count of a stable M/M/1 queue is the number of trials until the first
//! success minus one; since trials = failures + 1, that shift lands exactly
//! on the failure count, so `P(N = k) = rho^k (1 - rho)` and the batch mean
//! tends to `1/(1 - rho) - 1`. [`ShiftedGeometric`] is the only place that
//! conversion lives.

use queue_sweep_shared::error::SimError;
use rand::SeedableRng;
use rand_distr::{Distribution, Geometric};
use rand_pcg::Pcg64;

fn geometric(success_probability: f64) -> Result<Geometric, SimError> {
    if !(success_probability > 0.0 && success_probability <= 1.0) {
        return Err(SimError::invalid(format!(
            "success probability {} must lie in (0, 1]",
            success_probability
        )));
    }
    Geometric::new(success_probability).map_err(|e| {
        SimError::invalid(format!(
            "success probability {}: {:?}",
            success_probability, e
        ))
    })
}

/// Owned, seedable random stream shared by every draw of a sweep.
pub struct VariateSource {
    rng: Pcg64,
}

impl VariateSource {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(Pcg64::seed_from_u64(seed))
    }

    pub fn from_rng(rng: Pcg64) -> Self {
        Self { rng }
    }

    /// Failures before the first success, `P(X = k) = (1 - p)^k p`.
    pub fn draw_geometric(&mut self, success_probability: f64) -> Result<u64, SimError> {
        let dist = geometric(success_probability)?;
        Ok(dist.sample(&mut self.rng))
    }

    #[inline]
    pub fn sample<D: Distribution<u64>>(&mut self, dist: &D) -> u64 {
        dist.sample(&mut self.rng)
    }
}

/// Steady-state customer count of one queue at utilization `rho`.
#[derive(Debug, Clone, Copy)]
pub struct ShiftedGeometric {
    failures: Geometric,
}

impl ShiftedGeometric {
    pub fn new(utilization: f64) -> Result<Self, SimError> {
        if !(0.0..1.0).contains(&utilization) {
            return Err(SimError::invalid(format!(
                "utilization {:.2} must lie in [0, 1)",
                utilization
            )));
        }
        Ok(Self {
            failures: geometric(1.0 - utilization)?,
        })
    }
}

impl Distribution<u64> for ShiftedGeometric {
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        // (trials until success) - 1 == failures before success
        self.failures.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_geometric_rejects_out_of_range_probability() {
        let mut source = VariateSource::new(1);
        for p in [0.0, -0.2, 1.5, f64::NAN] {
            assert!(source.draw_geometric(p).is_err(), "p={} accepted", p);
        }
    }

    #[test]
    fn certain_success_never_fails() {
        let mut source = VariateSource::new(7);
        for _ in 0..100 {
            assert_eq!(source.draw_geometric(1.0).unwrap(), 0);
        }
    }

    #[test]
    fn draw_geometric_matches_failure_law() {
        // p = 0.5: P(0) = 0.5, P(1) = 0.25, mean = (1 - p) / p = 1
        let mut source = VariateSource::new(42);
        let n = 100_000;
        let draws: Vec<u64> = (0..n).map(|_| source.draw_geometric(0.5).unwrap()).collect();
        let zeros = draws.iter().filter(|&&v| v == 0).count() as f64 / n as f64;
        let ones = draws.iter().filter(|&&v| v == 1).count() as f64 / n as f64;
        let mean = draws.iter().sum::<u64>() as f64 / n as f64;
        assert!((zeros - 0.5).abs() < 0.01, "P(0) = {}", zeros);
        assert!((ones - 0.25).abs() < 0.01, "P(1) = {}", ones);
        assert!((mean - 1.0).abs() < 0.03, "mean = {}", mean);
    }

    #[test]
    fn shifted_geometric_rejects_unstable_utilization() {
        assert!(ShiftedGeometric::new(1.0).is_err());
        assert!(ShiftedGeometric::new(-0.1).is_err());
        assert!(ShiftedGeometric::new(f64::NAN).is_err());
        assert!(ShiftedGeometric::new(0.25).is_ok());
    }

    #[test]
    fn shifted_geometric_at_zero_load_is_empty_queue() {
        let customers = ShiftedGeometric::new(0.0).unwrap();
        let mut source = VariateSource::new(3);
        assert!((0..100).all(|_| source.sample(&customers) == 0));
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = VariateSource::new(99);
        let mut b = VariateSource::new(99);
        let dist = ShiftedGeometric::new(0.8).unwrap();
        let xs: Vec<u64> = (0..50).map(|_| a.sample(&dist)).collect();
        let ys: Vec<u64> = (0..50).map(|_| b.sample(&dist)).collect();
        assert_eq!(xs, ys);
    }
}
