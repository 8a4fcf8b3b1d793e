use crate::report::Report;
use crate::templates::{chart_panel, desktop_layout};
use maud::{html, Markup};

/// The whole single-page report, in fixed order: title, dataset info,
/// summary statistics, the chart panels, and the top-rated table.
pub fn dashboard_page(report: &Report) -> Markup {
    desktop_layout(
        "Airbnb Data Analysis Dashboard",
        html! {
            main class="container" {
                h1 { "\u{1F3E1} Airbnb Data Analysis Dashboard" }

                h2 { "\u{1F4CA} Descriptive Analysis" }

                section class="card" {
                    h3 { "Dataset Info" }
                    p { (report.row_count) " listings, " (report.columns.len()) " columns." }
                    table {
                        thead {
                            tr { th { "Column" } th { "Type" } th { "Non-null" } }
                        }
                        tbody {
                            @for col in &report.columns {
                                tr {
                                    td { (col.name) }
                                    td { (col.dtype) }
                                    td { (col.non_null) }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "Summary Statistics" }
                    table {
                        thead {
                            tr {
                                th { "Column" }
                                th { "Count" }
                                th { "Mean" }
                                th { "Std" }
                                th { "Min" }
                                th { "25%" }
                                th { "50%" }
                                th { "75%" }
                                th { "Max" }
                            }
                        }
                        tbody {
                            @for s in &report.summary {
                                tr {
                                    td { (s.column) }
                                    td { (s.count) }
                                    td { (num(s.mean)) }
                                    td { (num(s.std)) }
                                    td { (num(s.min)) }
                                    td { (num(s.q25)) }
                                    td { (num(s.median)) }
                                    td { (num(s.q75)) }
                                    td { (num(s.max)) }
                                }
                            }
                        }
                    }
                }

                @for (i, panel) in report.panels.iter().enumerate() {
                    // the demographic section starts at the group charts
                    @if i == 2 {
                        h2 { "\u{1F4CD} Demographic Analysis" }
                    }
                    (chart_panel(panel))
                }

                section class="card" {
                    h3 { "Top 10 Listings with Best Ratings" }
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Price" }
                                th { "Ratings" }
                                th { "Minimum Nights" }
                                th { "Availability (Days)" }
                                th { "Neighbourhood" }
                                th { "Neighbourhood Group" }
                            }
                        }
                        tbody {
                            @for row in &report.top_rated {
                                tr {
                                    td { (row.name) }
                                    td { (opt(row.price)) }
                                    td { (num(row.rating)) }
                                    td { (opt(row.minimum_nights)) }
                                    td { (opt(row.availability_in_days)) }
                                    td { (row.neighbourhood) }
                                    td { (row.neighbourhood_group) }
                                }
                            }
                        }
                    }
                }

                footer {
                    p class="muted" {
                        "Report generated at "
                        (report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))
                    }
                }
            }
        },
    )
}

fn num(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.2}")
    }
}

fn opt(v: Option<f64>) -> String {
    match v {
        Some(v) => num(v),
        None => String::new(),
    }
}
