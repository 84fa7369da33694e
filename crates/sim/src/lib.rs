//! Monte Carlo sampler for steady-state queue lengths and network delays.
//!
//! Sweeps run through [`runner`]; each design point draws a batch from
//! [`queue::QueueModel`] or [`network::NetworkModel`], both of which sample
//! the shifted geometric law in [`variate`].

pub mod network;
pub mod queue;
pub mod runner;
pub mod stability;
pub mod variate;

pub use queue_sweep_shared::error::SimError;
pub use queue_sweep_shared::result::{BatchSummary, ExperimentResult, SampleBatch};
