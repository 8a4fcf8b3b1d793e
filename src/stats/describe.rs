use crate::dataset::listing::{Listing, COLUMN_TYPES, NUMERIC_COLUMNS};

/// One row of the dataset-info block: column name, declared type, and how
/// many rows actually carry a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub dtype: &'static str,
    pub non_null: usize,
}

/// Summary statistics for one numeric column. `std` is the sample standard
/// deviation (ddof = 1) and is NaN when fewer than two values are present.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub column: &'static str,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

pub fn column_info(listings: &[Listing]) -> Vec<ColumnInfo> {
    COLUMN_TYPES
        .iter()
        .map(|&(name, dtype)| ColumnInfo {
            name,
            dtype,
            non_null: listings.iter().filter(|l| l.is_present(name)).count(),
        })
        .collect()
}

/// Per-column summary statistics over the numeric columns, in declaration
/// order. Columns with no values at all are omitted.
pub fn describe(listings: &[Listing]) -> Vec<NumericSummary> {
    NUMERIC_COLUMNS
        .iter()
        .filter_map(|&column| {
            let mut values: Vec<f64> = listings.iter().filter_map(|l| l.numeric(column)).collect();
            if values.is_empty() {
                return None;
            }
            values.sort_by(|a, b| a.total_cmp(b));

            let count = values.len();
            let mean = values.iter().sum::<f64>() / count as f64;
            let std = if count > 1 {
                let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                    / (count - 1) as f64;
                var.sqrt()
            } else {
                f64::NAN
            };

            Some(NumericSummary {
                column,
                count,
                mean,
                std,
                min: values[0],
                q25: quantile(&values, 0.25),
                median: quantile(&values, 0.50),
                q75: quantile(&values, 0.75),
                max: values[count - 1],
            })
        })
        .collect()
}

/// Quantile with linear interpolation over an ascending-sorted slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
