use crate::dataset::Listing;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// In-memory listing with sensible defaults; tests override what they need.
pub fn listing(
    name: &str,
    group: &str,
    neighbourhood: &str,
    price: Option<f64>,
    rating: Option<f64>,
) -> Listing {
    Listing {
        id: Some(1),
        name: name.to_string(),
        price,
        service_fee: price.map(|p| p * 0.2),
        neighbourhood: neighbourhood.to_string(),
        neighbourhood_group: group.to_string(),
        lat: Some(40.7),
        long: Some(-73.9),
        minimum_nights: Some(2.0),
        availability_in_days: Some(180.0),
        host_listings_count: Some(1.0),
        rating,
    }
}

/// Small fixed table used across the stats tests: neighbourhoods
/// {A: 3 listings, B: 1 listing}, two rows without a rating.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("Loft One", "Brooklyn", "A", Some(100.0), Some(4.5)),
        listing("Loft Two", "Brooklyn", "A", Some(200.0), None),
        listing("Loft Three", "Brooklyn", "A", Some(300.0), Some(4.9)),
        listing("Garden Room", "Queens", "B", Some(400.0), None),
        listing("Harbor Suite", "Queens", "C", Some(500.0), Some(3.8)),
    ]
}

/// Unique path under the system temp dir, one per call.
pub fn temp_csv_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{tag}_{}.csv",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

pub const CSV_HEADER: &str = "id,Name,price,service_fee,neighbourhood,Neighbourhood_group,lat,long,Minimum_nights,availability_in_days,Host_listings_count,Ratings";
