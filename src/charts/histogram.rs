use crate::charts::chart_error;
use crate::errors::ServerError;
use plotters::prelude::*;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 420;
const BINS: usize = 30;
const KDE_POINTS: usize = 200;

/// Histogram of prices with a Gaussian kernel-density curve overlaid,
/// scaled to counts so both series share the y axis.
pub fn price_histogram(values: &[f64]) -> Result<String, ServerError> {
    if values.is_empty() {
        return Err(ServerError::ChartError(
            "price column has no values to plot".into(),
        ));
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        max = min + 1.0;
    }
    let bin_width = (max - min) / BINS as f64;

    let mut counts = vec![0usize; BINS];
    for &v in values {
        let idx = (((v - min) / bin_width) as usize).min(BINS - 1);
        counts[idx] += 1;
    }

    let density = kde_curve(values, min, max);
    let scale = values.len() as f64 * bin_width;

    let count_max = counts.iter().copied().max().unwrap_or(0) as f64;
    let kde_max = density
        .iter()
        .map(|&(_, d)| d * scale)
        .fold(0.0, f64::max);
    let y_top = count_max.max(kde_max) * 1.1 + 1.0;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Distribution of Airbnb Prices", ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(min..max, 0f64..y_top)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .x_desc("Price")
            .y_desc("Count")
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(counts.iter().enumerate().map(|(i, &c)| {
                let x0 = min + i as f64 * bin_width;
                let x1 = x0 + bin_width;
                Rectangle::new([(x0, 0.0), (x1, c as f64)], RED.mix(0.45).filled())
            }))
            .map_err(chart_error)?;

        if !density.is_empty() {
            chart
                .draw_series(LineSeries::new(
                    density.iter().map(|&(x, d)| (x, d * scale)),
                    RED.stroke_width(2),
                ))
                .map_err(chart_error)?;
        }

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}

/// Gaussian KDE with Silverman's bandwidth, evaluated across [min, max].
/// Returns an empty curve when the data has no spread.
pub(crate) fn kde_curve(values: &[f64], min: f64, max: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let std =
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let iqr = crate::stats::describe::quantile(&sorted, 0.75)
        - crate::stats::describe::quantile(&sorted, 0.25);

    let spread = if iqr > 0.0 {
        std.min(iqr / 1.34)
    } else {
        std
    };
    let h = 0.9 * spread * (n as f64).powf(-0.2);
    if h <= 0.0 || !h.is_finite() {
        return Vec::new();
    }

    let norm = 1.0 / (n as f64 * h * (2.0 * std::f64::consts::PI).sqrt());
    (0..KDE_POINTS)
        .map(|i| {
            let x = min + (max - min) * i as f64 / (KDE_POINTS - 1) as f64;
            let d = values
                .iter()
                .map(|&v| (-0.5 * ((x - v) / h).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, d)
        })
        .collect()
}
