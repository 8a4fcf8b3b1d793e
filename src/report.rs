use crate::charts::{bar, heatmap, histogram, pie};
use crate::dataset::Listing;
use crate::errors::ServerError;
use crate::stats::correlate;
use crate::stats::describe::{self, ColumnInfo, NumericSummary};
use crate::stats::group::{group_mean, group_min, sort_desc, top_n, value_counts};
use crate::stats::rank;
use chrono::{DateTime, Utc};

/// Relative path the dataset is read from on every request.
pub const DATA_PATH: &str = "data/listings.csv";

/// A note is one author-written observation: a leading emphasised phrase
/// plus the rest of the sentence. Static display text, never computed.
pub type Note = (&'static str, &'static str);

pub struct ChartPanel {
    pub heading: &'static str,
    pub svg: String,
    pub notes: &'static [Note],
}

/// Projection of a top-rated listing for the final table.
pub struct TopRatedRow {
    pub name: String,
    pub price: Option<f64>,
    pub rating: f64,
    pub minimum_nights: Option<f64>,
    pub availability_in_days: Option<f64>,
    pub neighbourhood: String,
    pub neighbourhood_group: String,
}

/// Everything the dashboard page displays, in page order.
pub struct Report {
    pub row_count: usize,
    pub columns: Vec<ColumnInfo>,
    pub summary: Vec<NumericSummary>,
    pub panels: Vec<ChartPanel>,
    pub top_rated: Vec<TopRatedRow>,
    pub generated_at: DateTime<Utc>,
}

const HEATMAP_NOTES: &[Note] = &[
    (
        "Low Correlation Among Variables",
        " – Most correlations are close to zero, indicating weak relationships among features.",
    ),
    (
        "Price & Service Fee",
        " – Highly correlated, suggesting service fees may be proportional to prices.",
    ),
    (
        "Availability & Host Listings Count",
        " – Slight positive correlation (~0.15).",
    ),
    (
        "No Strong Correlation with Ratings",
        " – Suggests ratings depend on subjective factors.",
    ),
    (
        "Latitude & Longitude",
        " – Minimal correlation with other features.",
    ),
];

const PRICE_NOTES: &[Note] = &[
    (
        "Uniform Distribution",
        ": Prices are fairly evenly distributed across ranges.",
    ),
    (
        "Low and High Prices Present",
        ": Diverse listings for various budgets.",
    ),
    ("Density Peaks", ": Mid-range pricing is common."),
    ("No Extreme Outliers", ": Balanced price spread."),
];

const GROUP_COUNT_NOTES: &[Note] = &[
    ("Manhattan and Brooklyn", " dominate listings."),
    ("Queens", " follows distantly."),
    ("Staten Island and Bronx", " have fewer listings."),
    ("Skewed Distribution", " towards central boroughs."),
];

const GROUP_PRICE_NOTES: &[Note] = &[
    ("Queens has the highest average price", "."),
    ("Staten Island shows high variability", "."),
    ("Brooklyn & Manhattan", " have stable pricing."),
];

const PIE_NOTES: &[Note] = &[
    (
        "Bedford-Stuyvesant & Williamsburg",
        " lead with the most listings.",
    ),
    ("Harlem & Bushwick", " are also prominent."),
    ("Hell's Kitchen", " has the fewest among top 5."),
];

/// Build the full report from the loaded table.
///
/// The table is passed explicitly; nothing here holds state between runs, so
/// two runs over the same rows produce identical chart data.
pub fn generate(listings: &[Listing]) -> Result<Report, ServerError> {
    let columns = describe::column_info(listings);
    let summary = describe::describe(listings);

    let mut panels = Vec::new();

    let corr = correlate::correlation_matrix(listings);
    panels.push(ChartPanel {
        heading: "Feature Correlation Heatmap",
        svg: heatmap::correlation_heatmap(&corr)?,
        notes: HEATMAP_NOTES,
    });

    let prices: Vec<f64> = listings.iter().filter_map(|l| l.price).collect();
    panels.push(ChartPanel {
        heading: "Price Distribution",
        svg: histogram::price_histogram(&prices)?,
        notes: PRICE_NOTES,
    });

    let group_counts = top_n(value_counts(listings, |l| l.neighbourhood_group.as_str()), 10);
    panels.push(ChartPanel {
        heading: "Listings Count Per Neighbourhood Group",
        svg: bar::vertical_bar(
            "Listings Count Per Neighbourhood Group",
            "Listings",
            &group_counts,
        )?,
        notes: GROUP_COUNT_NOTES,
    });

    let group_prices = group_mean(listings, |l| l.neighbourhood_group.as_str(), |l| l.price);
    panels.push(ChartPanel {
        heading: "Average Price by Neighbourhood Group",
        svg: bar::vertical_bar(
            "Average Price by Neighbourhood Group",
            "Average Price",
            &group_prices,
        )?,
        notes: GROUP_PRICE_NOTES,
    });

    let top_neighbourhoods = top_n(value_counts(listings, |l| l.neighbourhood.as_str()), 5);
    panels.push(ChartPanel {
        heading: "Top 5 Neighborhoods by Number of Listings",
        svg: pie::pie_chart("Top 5 Neighborhoods by Number of Listings", &top_neighbourhoods)?,
        notes: PIE_NOTES,
    });

    let min_prices = top_n(
        sort_desc(group_min(listings, |l| l.neighbourhood.as_str(), |l| l.price)),
        10,
    );
    panels.push(ChartPanel {
        heading: "Top 10 Least Expensive Neighborhoods (Min Price)",
        svg: bar::horizontal_bar(
            "Top 10 Least Expensive Neighborhoods",
            "Price ($)",
            &min_prices,
        )?,
        notes: &[],
    });

    let availability = top_n(
        sort_desc(group_mean(
            listings,
            |l| l.neighbourhood.as_str(),
            |l| l.availability_in_days,
        )),
        10,
    );
    panels.push(ChartPanel {
        heading: "Top 10 Neighborhoods with Highest Availability (Days per Year)",
        svg: bar::horizontal_bar(
            "Highest Availability by Neighborhood",
            "Average Availability (Days)",
            &availability,
        )?,
        notes: &[],
    });

    let ratings = top_n(
        sort_desc(group_mean(listings, |l| l.neighbourhood.as_str(), |l| l.rating)),
        15,
    );
    panels.push(ChartPanel {
        heading: "Top 15 Neighborhoods with Highest Ratings",
        svg: bar::horizontal_bar("Neighborhood Ratings", "Average Rating", &ratings)?,
        notes: &[],
    });

    let top_rated = rank::top_rated(listings, 10);
    let price_by_name: Vec<crate::stats::group::GroupRow> = top_rated
        .iter()
        .map(|l| crate::stats::group::GroupRow {
            label: l.name.clone(),
            value: l.price.unwrap_or(0.0),
        })
        .collect();
    panels.push(ChartPanel {
        heading: "Top 10 Listings with Best Ratings",
        svg: bar::vertical_bar("Top 10 Listings with Best Ratings", "Price ($)", &price_by_name)?,
        notes: &[],
    });

    let top_rated = top_rated
        .into_iter()
        .map(|l| TopRatedRow {
            name: l.name.clone(),
            price: l.price,
            // top_rated only keeps rows with a rating
            rating: l.rating.unwrap_or(f64::NAN),
            minimum_nights: l.minimum_nights,
            availability_in_days: l.availability_in_days,
            neighbourhood: l.neighbourhood.clone(),
            neighbourhood_group: l.neighbourhood_group.clone(),
        })
        .collect();

    Ok(Report {
        row_count: listings.len(),
        columns,
        summary,
        panels,
        top_rated,
        generated_at: Utc::now(),
    })
}
