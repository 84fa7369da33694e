/// One sampled value per trial: a customer count or a cross-network delay.
pub type SampleBatch = Vec<u64>;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    entries: Vec<(f64, SampleBatch)>,
}

impl ExperimentResult {
    /// Entries keep the order they are given in, which is the sweep order.
    pub fn from_entries(entries: Vec<(f64, SampleBatch)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First batch recorded for `design_point`, compared exactly.
    pub fn get(&self, design_point: f64) -> Option<&SampleBatch> {
        self.entries
            .iter()
            .find(|(point, _)| *point == design_point)
            .map(|(_, batch)| batch)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &SampleBatch)> {
        self.entries.iter().map(|(point, batch)| (*point, batch))
    }

    pub fn design_points(&self) -> Vec<f64> {
        self.entries.iter().map(|(point, _)| *point).collect()
    }

    pub fn batches(&self) -> Vec<&SampleBatch> {
        self.entries.iter().map(|(_, batch)| batch).collect()
    }

    pub fn summaries(&self) -> Vec<(f64, BatchSummary)> {
        self.iter()
            .map(|(point, batch)| (point, BatchSummary::from_samples(batch)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divisor N).
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
}

impl BatchSummary {
    pub fn from_samples(samples: &[u64]) -> Self {
        if samples.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std_dev: 0.0,
                min: 0,
                max: 0,
            };
        }

        let n = samples.len() as f64;
        let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            count: samples.len(),
            mean,
            std_dev: variance.sqrt(),
            min: samples.iter().copied().min().unwrap_or(0),
            max: samples.iter().copied().max().unwrap_or(0),
        }
    }
}
