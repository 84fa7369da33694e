// Reference scenario parameters
pub const SERVICE_RATE: f64 = 1.0; // mu
pub const DESIGN_POINT_START: f64 = 0.3;
pub const DESIGN_POINT_END: f64 = 0.9;
pub const DESIGN_POINT_COUNT: usize = 7; // sparse design points
pub const TRIALS_PER_POINT: usize = 50;
pub const NETWORK_SERVERS: usize = 5;
pub const DEFAULT_SEED: u64 = 0;

/// Evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

fn reference_design_points() -> Vec<f64> {
    linspace(DESIGN_POINT_START, DESIGN_POINT_END, DESIGN_POINT_COUNT)
}

#[derive(Debug, Clone)]
pub struct QueueSweepConfig {
    pub arrival_rates: Vec<f64>,
    pub service_rate: f64,
    pub trials: usize,
    pub seed: u64,
}

impl Default for QueueSweepConfig {
    fn default() -> Self {
        Self {
            arrival_rates: reference_design_points(),
            service_rate: SERVICE_RATE,
            trials: TRIALS_PER_POINT,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NetworkSweepConfig {
    pub load_factors: Vec<f64>,
    pub server_count: usize,
    pub trials: usize,
    pub seed: u64,
}

impl Default for NetworkSweepConfig {
    fn default() -> Self {
        Self {
            load_factors: reference_design_points(),
            server_count: NETWORK_SERVERS,
            trials: TRIALS_PER_POINT,
            seed: DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let points = linspace(0.3, 0.9, 7);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], 0.3);
        assert_eq!(points[6], 0.9);
        assert!((points[3] - 0.6).abs() < 1e-12, "midpoint: {}", points[3]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.3, 0.9, 0).is_empty());
        assert_eq!(linspace(0.3, 0.9, 1), vec![0.3]);
    }

    #[test]
    fn defaults_match_reference_scenario() {
        let queue = QueueSweepConfig::default();
        assert_eq!(queue.arrival_rates.len(), DESIGN_POINT_COUNT);
        assert_eq!(queue.service_rate, 1.0);
        assert_eq!(queue.trials, 50);

        let network = NetworkSweepConfig::default();
        assert_eq!(network.load_factors, queue.arrival_rates);
        assert_eq!(network.server_count, 5);
    }
}
