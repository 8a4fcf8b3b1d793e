use super::utils::{listing, sample_listings};
use crate::charts::heatmap::cell_color;
use crate::charts::histogram::kde_curve;
use crate::report;
use crate::stats::correlate::correlation_matrix;
use crate::stats::describe::{column_info, describe, quantile};
use crate::stats::group::{group_mean, group_min, sort_desc, top_n, value_counts};
use crate::stats::rank::top_rated;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn describe_matches_hand_computed_price_stats() {
    let listings = sample_listings();
    let summary = describe(&listings);

    let price = summary.iter().find(|s| s.column == "price").unwrap();
    assert_eq!(price.count, 5);
    assert!(close(price.mean, 300.0));
    assert!(close(price.std, 25000f64.sqrt()));
    assert!(close(price.min, 100.0));
    assert!(close(price.q25, 200.0));
    assert!(close(price.median, 300.0));
    assert!(close(price.q75, 400.0));
    assert!(close(price.max, 500.0));

    // two of the five rows have no rating
    let rating = summary.iter().find(|s| s.column == "Ratings").unwrap();
    assert_eq!(rating.count, 3);
    assert!(close(rating.mean, (4.5 + 4.9 + 3.8) / 3.0));
}

#[test]
fn quantile_interpolates_linearly() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert!(close(quantile(&sorted, 0.25), 1.75));
    assert!(close(quantile(&sorted, 0.50), 2.5));
    assert!(close(quantile(&sorted, 0.75), 3.25));
    assert!(close(quantile(&[7.0], 0.5), 7.0));
}

#[test]
fn column_info_counts_missing_cells() {
    let listings = sample_listings();
    let info = column_info(&listings);

    let ratings = info.iter().find(|c| c.name == "Ratings").unwrap();
    assert_eq!(ratings.non_null, 3);
    let names = info.iter().find(|c| c.name == "Name").unwrap();
    assert_eq!(names.non_null, 5);
}

#[test]
fn correlation_matrix_is_symmetric_with_unit_diagonal() {
    let listings = sample_listings();
    let matrix = correlation_matrix(&listings);
    let n = matrix.labels.len();

    for i in 0..n {
        for j in 0..n {
            let r = matrix.values[i][j];
            if r.is_nan() {
                assert!(matrix.values[j][i].is_nan());
                continue;
            }
            assert!(close(r, matrix.values[j][i]));
            assert!((-1.0..=1.0).contains(&r));
            if i == j {
                assert!(close(r, 1.0));
            }
        }
    }

    // service_fee is proportional to price in the fixture
    let price = matrix.labels.iter().position(|&l| l == "price").unwrap();
    let fee = matrix
        .labels
        .iter()
        .position(|&l| l == "service_fee")
        .unwrap();
    assert!(close(matrix.values[price][fee], 1.0));

    // lat is constant, so its whole row is NaN
    let lat = matrix.labels.iter().position(|&l| l == "lat").unwrap();
    assert!(matrix.values[lat].iter().all(|v| v.is_nan()));
}

#[test]
fn value_counts_orders_by_count_then_label() {
    let listings = vec![
        listing("One", "G", "A", Some(10.0), None),
        listing("Two", "G", "A", Some(10.0), None),
        listing("Three", "G", "A", Some(10.0), None),
        listing("Four", "G", "B", Some(10.0), None),
    ];

    let counts = top_n(value_counts(&listings, |l| l.neighbourhood.as_str()), 10);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].label, "A");
    assert!(close(counts[0].value, 3.0));
    assert_eq!(counts[1].label, "B");
    assert!(close(counts[1].value, 1.0));
}

#[test]
fn top_n_returns_at_most_the_distinct_group_count() {
    let listings = sample_listings();
    let counts = top_n(value_counts(&listings, |l| l.neighbourhood.as_str()), 10);
    // only three distinct neighbourhoods exist
    assert_eq!(counts.len(), 3);

    let counts = top_n(value_counts(&listings, |l| l.neighbourhood.as_str()), 2);
    assert_eq!(counts.len(), 2);
}

#[test]
fn group_aggregations_skip_missing_values() {
    let listings = vec![
        listing("One", "G", "A", Some(100.0), None),
        listing("Two", "G", "A", None, None),
        listing("Three", "G", "A", Some(300.0), None),
        listing("Four", "G", "B", None, None),
    ];

    let means = group_mean(&listings, |l| l.neighbourhood.as_str(), |l| l.price);
    // group B has no prices at all and is dropped
    assert_eq!(means.len(), 1);
    assert_eq!(means[0].label, "A");
    assert!(close(means[0].value, 200.0));

    let mins = group_min(&listings, |l| l.neighbourhood.as_str(), |l| l.price);
    assert_eq!(mins.len(), 1);
    assert!(close(mins[0].value, 100.0));
}

#[test]
fn sort_desc_breaks_ties_by_label() {
    let listings = vec![
        listing("One", "G", "B", Some(50.0), None),
        listing("Two", "G", "A", Some(50.0), None),
        listing("Three", "G", "C", Some(80.0), None),
    ];

    let rows = sort_desc(group_min(&listings, |l| l.neighbourhood.as_str(), |l| l.price));
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["C", "A", "B"]);
}

#[test]
fn top_rated_excludes_missing_and_is_non_increasing() {
    let listings = sample_listings();
    let ranked = top_rated(&listings, 10);

    // two of the five rows have no rating
    assert_eq!(ranked.len(), 3);
    for pair in ranked.windows(2) {
        assert!(pair[0].rating.unwrap() >= pair[1].rating.unwrap());
    }
    assert_eq!(ranked[0].name, "Loft Three");
}

#[test]
fn top_rated_ties_order_by_name() {
    let listings = vec![
        listing("Beta", "G", "A", Some(10.0), Some(4.5)),
        listing("Alpha", "G", "A", Some(10.0), Some(4.5)),
    ];

    let ranked = top_rated(&listings, 10);
    assert_eq!(ranked[0].name, "Alpha");
    assert_eq!(ranked[1].name, "Beta");
}

#[test]
fn kde_curve_is_empty_without_spread() {
    assert!(kde_curve(&[5.0, 5.0, 5.0], 0.0, 10.0).is_empty());
    assert!(kde_curve(&[5.0], 0.0, 10.0).is_empty());

    let curve = kde_curve(&[1.0, 2.0, 3.0, 8.0], 1.0, 8.0);
    assert!(!curve.is_empty());
    assert!(curve.iter().all(|&(_, d)| d >= 0.0));
}

#[test]
fn heatmap_scale_endpoints_are_saturated() {
    let rgb = |r: f64| {
        let c = cell_color(r);
        (c.0, c.1, c.2)
    };
    assert_eq!(rgb(0.0), (255, 255, 255));
    // warm side leans red, cool side leans blue
    assert!(rgb(1.0).0 > rgb(1.0).2);
    assert!(rgb(-1.0).2 > rgb(-1.0).0);
    assert_eq!(rgb(f64::NAN), (240, 240, 240));
}

#[test]
fn report_generation_is_deterministic() {
    let listings = sample_listings();
    let first = report::generate(&listings).unwrap();
    let second = report::generate(&listings).unwrap();

    assert_eq!(first.panels.len(), 9);
    for (a, b) in first.panels.iter().zip(second.panels.iter()) {
        assert_eq!(a.heading, b.heading);
        assert_eq!(a.svg, b.svg);
    }
    assert_eq!(first.summary, second.summary);

    let names_a: Vec<&str> = first.top_rated.iter().map(|r| r.name.as_str()).collect();
    let names_b: Vec<&str> = second.top_rated.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names_a, names_b);
}
