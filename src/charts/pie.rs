use crate::charts::{chart_error, CHART_COLORS};
use crate::errors::ServerError;
use crate::stats::group::GroupRow;
use plotters::prelude::*;

const SIZE: u32 = 560;

/// Pie chart with slice labels and percentage annotations.
pub fn pie_chart(title: &str, rows: &[GroupRow]) -> Result<String, ServerError> {
    if rows.is_empty() {
        return Err(ServerError::ChartError(format!("no data for chart '{title}'")));
    }

    let sizes: Vec<f64> = rows.iter().map(|r| r.value).collect();
    let labels: Vec<String> = rows.iter().map(|r| r.label.clone()).collect();
    let colors: Vec<RGBColor> = (0..rows.len())
        .map(|i| CHART_COLORS[i % CHART_COLORS.len()])
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (SIZE, SIZE)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;
        let root = root
            .titled(title, ("sans-serif", 22))
            .map_err(chart_error)?;

        let center = (SIZE as i32 / 2, SIZE as i32 / 2);
        let radius = SIZE as f64 / 3.2;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(140.0);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 14).into_font().color(&BLACK));

        root.draw(&pie).map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}
