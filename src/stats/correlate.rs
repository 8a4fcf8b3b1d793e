use crate::dataset::listing::{Listing, NUMERIC_COLUMNS};

/// Pairwise Pearson correlation over the numeric columns.
///
/// `values[i][j]` is the correlation between `labels[i]` and `labels[j]`.
/// Cells where fewer than two complete pairs exist, or where either column
/// has zero variance, are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<&'static str>,
    pub values: Vec<Vec<f64>>,
}

pub fn correlation_matrix(listings: &[Listing]) -> CorrelationMatrix {
    let labels: Vec<&'static str> = NUMERIC_COLUMNS.to_vec();
    let n = labels.len();

    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in 0..=i {
            // Pairwise-complete observations: a row contributes only when
            // both columns hold a value.
            let pairs: Vec<(f64, f64)> = listings
                .iter()
                .filter_map(|l| Some((l.numeric(labels[i])?, l.numeric(labels[j])?)))
                .collect();

            let r = if i == j {
                diagonal(&pairs)
            } else {
                pearson(&pairs)
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { labels, values }
}

/// A column correlates perfectly with itself as long as it varies at all.
fn diagonal(pairs: &[(f64, f64)]) -> f64 {
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let mean = pairs.iter().map(|p| p.0).sum::<f64>() / pairs.len() as f64;
    if pairs.iter().all(|p| (p.0 - mean).abs() < f64::EPSILON) {
        f64::NAN
    } else {
        1.0
    }
}

pub fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}
