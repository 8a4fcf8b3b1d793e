use crate::report::{ChartPanel, Note};
use maud::{html, Markup, PreEscaped};

/// One chart section: heading, inline SVG, optional observation notes.
pub fn chart_panel(panel: &ChartPanel) -> Markup {
    html! {
        section class="card" {
            h3 { (panel.heading) }
            div class="chart" {
                (PreEscaped(&panel.svg))
            }
            @if !panel.notes.is_empty() {
                (notes_list(panel.notes))
            }
        }
    }
}

pub fn notes_list(notes: &[Note]) -> Markup {
    html! {
        ul class="notes" {
            @for (strong_part, rest) in notes {
                li { strong { (strong_part) } (rest) }
            }
        }
    }
}
