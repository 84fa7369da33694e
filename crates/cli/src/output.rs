use queue_sweep_shared::result::{BatchSummary, ExperimentResult};
use std::time::Duration;

/// Labels used for the text report and the box-plot of one model.
pub struct ModelReport {
    pub point_label: &'static str,
    pub mean_label: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

pub const QUEUE_REPORT: ModelReport = ModelReport {
    point_label: "Arrival Rate",
    mean_label: "Mean Customers",
    title: "M/M/1 Queue Simulation",
    x_label: "Arrival Rate (λ)",
    y_label: "Steady-State Number of Customers",
};

pub const NETWORK_REPORT: ModelReport = ModelReport {
    point_label: "Load Factor",
    mean_label: "Mean Delay",
    title: "Computer Communication Network Simulation",
    x_label: "Load Factor (lambda/mu)",
    y_label: "Total Delay (across servers)",
};

pub fn summary_line(model: &ModelReport, design_point: f64, summary: &BatchSummary) -> String {
    format!(
        "{}: {:.2}, {}: {:.2}, Std Dev: {:.2}",
        model.point_label, design_point, model.mean_label, summary.mean, summary.std_dev
    )
}

pub fn print_results(result: &ExperimentResult, model: &ModelReport, elapsed: Duration) {
    println!("\n========================================");
    println!("  Design points: {}", result.len());
    println!("  Time:          {:.2}s", elapsed.as_secs_f64());
    println!("========================================");

    for (point, summary) in result.summaries() {
        println!("{}", summary_line(model, point, &summary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_line_matches_report_format() {
        let summary = BatchSummary::from_samples(&[0, 1, 2, 1]);
        assert_eq!(
            summary_line(&QUEUE_REPORT, 0.3, &summary),
            "Arrival Rate: 0.30, Mean Customers: 1.00, Std Dev: 0.71"
        );
    }

    #[test]
    fn network_line_matches_report_format() {
        let summary = BatchSummary::from_samples(&[5, 5]);
        assert_eq!(
            summary_line(&NETWORK_REPORT, 0.9, &summary),
            "Load Factor: 0.90, Mean Delay: 5.00, Std Dev: 0.00"
        );
    }
}
