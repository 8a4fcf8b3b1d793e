use crate::charts::{chart_error, fmt_value, CHART_COLORS};
use crate::errors::ServerError;
use crate::stats::group::GroupRow;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 460;

/// Vertical bar chart with a value label above each bar. Category labels
/// rotate when any of them is too long to sit flat under its bar.
pub fn vertical_bar(title: &str, y_desc: &str, rows: &[GroupRow]) -> Result<String, ServerError> {
    if rows.is_empty() {
        return Err(ServerError::ChartError(format!("no data for chart '{title}'")));
    }

    let n = rows.len();
    let vmax = rows.iter().map(|r| r.value).fold(0.0, f64::max);
    let y_top = if vmax > 0.0 { vmax * 1.15 } else { 1.0 };
    let rotate = rows.iter().any(|r| r.label.len() > 10);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(if rotate { 150 } else { 40 })
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..n as f64, 0f64..y_top)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .y_desc(y_desc)
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(rows.iter().enumerate().map(|(i, row)| {
                let color = CHART_COLORS[i % CHART_COLORS.len()];
                Rectangle::new(
                    [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, row.value)],
                    color.filled(),
                )
            }))
            .map_err(chart_error)?;

        let value_font = ("sans-serif", 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(rows.iter().enumerate().map(|(i, row)| {
                Text::new(
                    fmt_value(row.value),
                    (i as f64 + 0.5, row.value + y_top * 0.01),
                    value_font.clone(),
                )
            }))
            .map_err(chart_error)?;

        let label_font = ("sans-serif", 14).into_font().color(&BLACK);
        for (i, row) in rows.iter().enumerate() {
            let (px, py) = chart.backend_coord(&(i as f64 + 0.5, 0.0));
            let style = if rotate {
                label_font
                    .clone()
                    .pos(Pos::new(HPos::Left, VPos::Center))
                    .transform(FontTransform::Rotate90)
            } else {
                label_font.clone().pos(Pos::new(HPos::Center, VPos::Top))
            };
            root.draw(&Text::new(row.label.clone(), (px, py + 8), style))
                .map_err(chart_error)?;
        }

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}

/// Horizontal bar chart, first row at the top, value labels at bar ends.
/// Suits long category names such as neighbourhoods.
pub fn horizontal_bar(title: &str, x_desc: &str, rows: &[GroupRow]) -> Result<String, ServerError> {
    if rows.is_empty() {
        return Err(ServerError::ChartError(format!("no data for chart '{title}'")));
    }

    let n = rows.len();
    let vmax = rows.iter().map(|r| r.value).fold(0.0, f64::max);
    let x_top = if vmax > 0.0 { vmax * 1.15 } else { 1.0 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(200)
            .build_cartesian_2d(0f64..x_top, 0f64..n as f64)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(0)
            .x_desc(x_desc)
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(rows.iter().enumerate().map(|(i, row)| {
                let y = (n - 1 - i) as f64;
                let color = CHART_COLORS[i % CHART_COLORS.len()];
                Rectangle::new([(0.0, y + 0.15), (row.value, y + 0.85)], color.filled())
            }))
            .map_err(chart_error)?;

        let value_font = ("sans-serif", 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));
        chart
            .draw_series(rows.iter().enumerate().map(|(i, row)| {
                let y = (n - 1 - i) as f64 + 0.5;
                Text::new(
                    fmt_value(row.value),
                    (row.value + x_top * 0.005, y),
                    value_font.clone(),
                )
            }))
            .map_err(chart_error)?;

        let label_font = ("sans-serif", 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        for (i, row) in rows.iter().enumerate() {
            let y = (n - 1 - i) as f64 + 0.5;
            let (px, py) = chart.backend_coord(&(0.0, y));
            root.draw(&Text::new(row.label.clone(), (px - 8, py), label_font.clone()))
                .map_err(chart_error)?;
        }

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}
