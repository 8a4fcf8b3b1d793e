use crate::dataset::listing::Listing;
use std::collections::BTreeMap;

/// One group with its aggregated value (a count, mean, or min).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub label: String,
    pub value: f64,
}

/// Listing count per distinct value of `key`, ordered by count descending.
/// Ties break by label ascending so repeated runs give identical output.
pub fn value_counts<'a, K>(listings: &'a [Listing], key: K) -> Vec<GroupRow>
where
    K: Fn(&'a Listing) -> &'a str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for listing in listings {
        *counts.entry(key(listing)).or_insert(0) += 1;
    }

    let mut rows: Vec<GroupRow> = counts
        .into_iter()
        .map(|(label, count)| GroupRow {
            label: label.to_string(),
            value: count as f64,
        })
        .collect();
    // BTreeMap iteration is label-ascending; the stable sort keeps that
    // order within equal counts.
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows
}

/// Mean of `value` per group, ordered by label. Rows with a missing value
/// are excluded; groups with no values at all are dropped.
pub fn group_mean<'a, K, V>(listings: &'a [Listing], key: K, value: V) -> Vec<GroupRow>
where
    K: Fn(&'a Listing) -> &'a str,
    V: Fn(&'a Listing) -> Option<f64>,
{
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for listing in listings {
        if let Some(v) = value(listing) {
            let entry = sums.entry(key(listing)).or_insert((0.0, 0));
            entry.0 += v;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(label, (sum, count))| GroupRow {
            label: label.to_string(),
            value: sum / count as f64,
        })
        .collect()
}

/// Minimum of `value` per group, ordered by label. Same missing-value
/// handling as [`group_mean`].
pub fn group_min<'a, K, V>(listings: &'a [Listing], key: K, value: V) -> Vec<GroupRow>
where
    K: Fn(&'a Listing) -> &'a str,
    V: Fn(&'a Listing) -> Option<f64>,
{
    let mut mins: BTreeMap<&str, f64> = BTreeMap::new();
    for listing in listings {
        if let Some(v) = value(listing) {
            mins.entry(key(listing))
                .and_modify(|m| *m = m.min(v))
                .or_insert(v);
        }
    }

    mins.into_iter()
        .map(|(label, value)| GroupRow {
            label: label.to_string(),
            value,
        })
        .collect()
}

/// Reorder by aggregated value descending, label ascending on ties.
pub fn sort_desc(mut rows: Vec<GroupRow>) -> Vec<GroupRow> {
    rows.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    rows
}

/// Keep the first `n` rows.
pub fn top_n(mut rows: Vec<GroupRow>, n: usize) -> Vec<GroupRow> {
    rows.truncate(n);
    rows
}
