use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use queue_sweep_shared::result::ExperimentResult;

use crate::output::ModelReport;

const CHART_SIZE: (u32, u32) = (1024, 768);
const BOX_HALF_WIDTH: f32 = 0.2;
const CAP_HALF_WIDTH: f32 = 0.1;

/// Design-point label on the x axis.
pub fn point_label(design_point: f64) -> String {
    format!("{:.2}", design_point)
}

/// Box and whisker geometry of one batch.
///
/// Whiskers end at the most extreme samples inside the Tukey fences
/// (1.5 IQR beyond the quartiles); samples past the fences are fliers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f32,
    pub median: f32,
    pub q3: f32,
    pub whisker_low: f32,
    pub whisker_high: f32,
    pub fliers: Vec<f32>,
}

impl BoxStats {
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let values: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
        let [lower_fence, q1, median, q3, upper_fence] = Quartiles::new(&values).values();

        let mut whisker_low = q1;
        let mut whisker_high = q3;
        let mut fliers = Vec::new();
        for &v in &values {
            let v = v as f32;
            if v < lower_fence || v > upper_fence {
                fliers.push(v);
            } else {
                whisker_low = whisker_low.min(v);
                whisker_high = whisker_high.max(v);
            }
        }

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            fliers,
        })
    }
}

/// Writes one vertical box per design point, in sweep order.
pub fn render_boxplot(
    result: &ExperimentResult,
    model: &ModelReport,
    path: &Path,
) -> anyhow::Result<()> {
    if result.is_empty() {
        anyhow::bail!("no design points to plot");
    }

    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        draw(SVGBackend::new(path, CHART_SIZE).into_drawing_area(), result, model)
    } else {
        draw(BitMapBackend::new(path, CHART_SIZE).into_drawing_area(), result, model)
    }
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    result: &ExperimentResult,
    model: &ModelReport,
) -> anyhow::Result<()> {
    let labels: Vec<String> = result.design_points().into_iter().map(point_label).collect();
    let boxes = result
        .iter()
        .map(|(point, batch)| {
            BoxStats::from_samples(batch)
                .ok_or_else(|| anyhow::anyhow!("design point {:.2} has no samples", point))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let y_max = result
        .batches()
        .into_iter()
        .flat_map(|batch| batch.iter().copied())
        .max()
        .unwrap_or(0) as f32;
    let n = labels.len() as f32;

    root.fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("failed to fill background: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(model.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f32..n - 0.5, -0.5f32..y_max + 1.0)
        .map_err(|e| anyhow::anyhow!("failed to build chart: {e}"))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(model.x_label)
        .y_desc(model.y_label)
        .x_labels(labels.len())
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() > 1e-3 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(|e| anyhow::anyhow!("failed to draw mesh: {e}"))?;

    chart
        .draw_series(boxes.iter().enumerate().map(|(i, b)| {
            let x = i as f32;
            Rectangle::new(
                [(x - BOX_HALF_WIDTH, b.q3), (x + BOX_HALF_WIDTH, b.q1)],
                BLUE.stroke_width(1),
            )
        }))
        .map_err(|e| anyhow::anyhow!("failed to draw boxes: {e}"))?;

    chart
        .draw_series(boxes.iter().enumerate().flat_map(|(i, b)| {
            let x = i as f32;
            [
                (vec![(x - BOX_HALF_WIDTH, b.median), (x + BOX_HALF_WIDTH, b.median)], 2),
                (vec![(x, b.q3), (x, b.whisker_high)], 1),
                (vec![(x, b.q1), (x, b.whisker_low)], 1),
                (vec![(x - CAP_HALF_WIDTH, b.whisker_high), (x + CAP_HALF_WIDTH, b.whisker_high)], 1),
                (vec![(x - CAP_HALF_WIDTH, b.whisker_low), (x + CAP_HALF_WIDTH, b.whisker_low)], 1),
            ]
            .into_iter()
            .map(|(points, width)| PathElement::new(points, BLUE.stroke_width(width)))
        }))
        .map_err(|e| anyhow::anyhow!("failed to draw whiskers: {e}"))?;

    chart
        .draw_series(boxes.iter().enumerate().flat_map(|(i, b)| {
            let x = i as f32;
            b.fliers
                .iter()
                .map(move |&v| Circle::new((x, v), 3, BLACK.stroke_width(1)))
        }))
        .map_err(|e| anyhow::anyhow!("failed to draw fliers: {e}"))?;

    root.present()
        .map_err(|e| anyhow::anyhow!("failed to write chart: {e}"))?;
    Ok(())
}
