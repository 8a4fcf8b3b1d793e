use serde::Deserialize;

/// One rental listing (one row of the CSV).
///
/// CSV header names are case-sensitive and bound explicitly, so a renamed
/// source column is caught by the loader rather than by a later aggregation.
/// Numeric fields are optional because the source data leaves cells blank.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub id: Option<i64>,

    #[serde(rename = "Name")]
    pub name: String,

    pub price: Option<f64>,
    pub service_fee: Option<f64>,

    pub neighbourhood: String,
    #[serde(rename = "Neighbourhood_group")]
    pub neighbourhood_group: String,

    pub lat: Option<f64>,
    pub long: Option<f64>,

    #[serde(rename = "Minimum_nights")]
    pub minimum_nights: Option<f64>,
    pub availability_in_days: Option<f64>,
    #[serde(rename = "Host_listings_count")]
    pub host_listings_count: Option<f64>,

    #[serde(rename = "Ratings")]
    pub rating: Option<f64>,
}

/// Every column the loader requires, by CSV header name.
pub const EXPECTED_COLUMNS: [&str; 12] = [
    "id",
    "Name",
    "price",
    "service_fee",
    "neighbourhood",
    "Neighbourhood_group",
    "lat",
    "long",
    "Minimum_nights",
    "availability_in_days",
    "Host_listings_count",
    "Ratings",
];

/// (CSV header, declared type) for the dataset-info block.
pub const COLUMN_TYPES: [(&str, &str); 12] = [
    ("id", "integer"),
    ("Name", "text"),
    ("price", "float"),
    ("service_fee", "float"),
    ("neighbourhood", "text"),
    ("Neighbourhood_group", "text"),
    ("lat", "float"),
    ("long", "float"),
    ("Minimum_nights", "float"),
    ("availability_in_days", "float"),
    ("Host_listings_count", "float"),
    ("Ratings", "float"),
];

/// Columns that participate in summary statistics and correlation,
/// in display order. The id column is an identifier, not a measurement.
pub const NUMERIC_COLUMNS: [&str; 8] = [
    "price",
    "service_fee",
    "lat",
    "long",
    "Minimum_nights",
    "availability_in_days",
    "Host_listings_count",
    "Ratings",
];

impl Listing {
    /// Value of a numeric column by CSV header name.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "price" => self.price,
            "service_fee" => self.service_fee,
            "lat" => self.lat,
            "long" => self.long,
            "Minimum_nights" => self.minimum_nights,
            "availability_in_days" => self.availability_in_days,
            "Host_listings_count" => self.host_listings_count,
            "Ratings" => self.rating,
            _ => None,
        }
    }

    /// Whether a column holds a value in this row. Blank text cells count
    /// as missing, matching how the source data treats them.
    pub fn is_present(&self, column: &str) -> bool {
        match column {
            "id" => self.id.is_some(),
            "Name" => !self.name.is_empty(),
            "neighbourhood" => !self.neighbourhood.is_empty(),
            "Neighbourhood_group" => !self.neighbourhood_group.is_empty(),
            other => self.numeric(other).is_some(),
        }
    }
}
