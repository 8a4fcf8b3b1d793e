pub mod bar;
pub mod heatmap;
pub mod histogram;
pub mod pie;

use crate::errors::ServerError;
use plotters::prelude::RGBColor;

pub(crate) const COLOR_BLUE: RGBColor = RGBColor(59, 130, 246);
pub(crate) const COLOR_EMERALD: RGBColor = RGBColor(16, 185, 129);
pub(crate) const COLOR_AMBER: RGBColor = RGBColor(245, 158, 11);
pub(crate) const COLOR_ROSE: RGBColor = RGBColor(244, 63, 94);
pub(crate) const COLOR_PURPLE: RGBColor = RGBColor(139, 92, 246);
pub(crate) const COLOR_PINK: RGBColor = RGBColor(236, 72, 153);
pub(crate) const COLOR_TEAL: RGBColor = RGBColor(20, 184, 166);
pub(crate) const COLOR_ORANGE: RGBColor = RGBColor(249, 115, 22);
pub(crate) const COLOR_LIME: RGBColor = RGBColor(132, 204, 22);
pub(crate) const COLOR_SLATE: RGBColor = RGBColor(100, 116, 139);

pub(crate) const CHART_COLORS: [RGBColor; 10] = [
    COLOR_BLUE,
    COLOR_EMERALD,
    COLOR_AMBER,
    COLOR_ROSE,
    COLOR_PURPLE,
    COLOR_PINK,
    COLOR_TEAL,
    COLOR_ORANGE,
    COLOR_LIME,
    COLOR_SLATE,
];

pub(crate) fn chart_error(e: impl std::fmt::Display) -> ServerError {
    ServerError::ChartError(e.to_string())
}

/// Value label next to a bar: whole numbers without a decimal point.
pub(crate) fn fmt_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
