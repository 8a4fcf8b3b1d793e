use crate::charts::{chart_error, COLOR_BLUE, COLOR_ROSE};
use crate::errors::ServerError;
use crate::stats::correlate::CorrelationMatrix;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 640;

/// Annotated correlation heatmap on a fixed blue-white-red scale over
/// [-1, 1]. NaN cells (constant or empty columns) render as blank gray.
pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> Result<String, ServerError> {
    let n = matrix.labels.len();
    if n == 0 {
        return Err(ServerError::ChartError("correlation matrix is empty".into()));
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Feature Correlation Heatmap", ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(150)
            .y_label_area_size(170)
            .build_cartesian_2d(0f64..n as f64, 0f64..n as f64)
            .map_err(chart_error)?;

        for (i, row) in matrix.values.iter().enumerate() {
            for (j, &r) in row.iter().enumerate() {
                let (x, y) = (j as f64, i as f64);
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x, y), (x + 1.0, y + 1.0)],
                        cell_color(r).filled(),
                    )))
                    .map_err(chart_error)?;
                // thin white grid between cells
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x, y), (x + 1.0, y + 1.0)],
                        WHITE.stroke_width(1),
                    )))
                    .map_err(chart_error)?;

                if !r.is_nan() {
                    let style = ("sans-serif", 14)
                        .into_font()
                        .color(&annotation_color(r))
                        .pos(Pos::new(HPos::Center, VPos::Center));
                    chart
                        .draw_series(std::iter::once(Text::new(
                            format!("{r:.2}"),
                            (x + 0.5, y + 0.5),
                            style,
                        )))
                        .map_err(chart_error)?;
                }
            }
        }

        // Axis labels drawn in the reserved margins.
        let label_font = ("sans-serif", 14).into_font().color(&BLACK);
        for (i, label) in matrix.labels.iter().enumerate() {
            let (px, py) = chart.backend_coord(&(i as f64 + 0.5, 0.0));
            root.draw(&Text::new(
                label.to_string(),
                (px - 5, py + 8),
                label_font
                    .clone()
                    .pos(Pos::new(HPos::Left, VPos::Center))
                    .transform(FontTransform::Rotate90),
            ))
            .map_err(chart_error)?;

            let (px, py) = chart.backend_coord(&(0.0, i as f64 + 0.5));
            root.draw(&Text::new(
                label.to_string(),
                (px - 8, py),
                label_font.clone().pos(Pos::new(HPos::Right, VPos::Center)),
            ))
            .map_err(chart_error)?;
        }

        root.present().map_err(chart_error)?;
    }

    Ok(svg)
}

/// Fixed diverging scale: -1 saturated blue, 0 white, +1 saturated red.
pub(crate) fn cell_color(r: f64) -> RGBColor {
    if r.is_nan() {
        return RGBColor(240, 240, 240);
    }
    let t = r.clamp(-1.0, 1.0);
    if t < 0.0 {
        blend(WHITE, COLOR_BLUE, -t)
    } else {
        blend(WHITE, COLOR_ROSE, t)
    }
}

fn annotation_color(r: f64) -> RGBColor {
    if r.abs() > 0.6 {
        WHITE
    } else {
        RGBColor(30, 30, 30)
    }
}

fn blend(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}
