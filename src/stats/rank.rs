use crate::dataset::listing::Listing;
use std::cmp::Ordering;

/// The `n` best-rated listings, rating descending.
///
/// Rows with a missing rating are dropped before ranking. Equal ratings
/// order by name ascending so the ranking is deterministic.
pub fn top_rated(listings: &[Listing], n: usize) -> Vec<&Listing> {
    let mut rated: Vec<&Listing> = listings.iter().filter(|l| l.rating.is_some()).collect();

    rated.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    rated.truncate(n);
    rated
}
