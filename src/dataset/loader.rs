use crate::dataset::listing::{Listing, EXPECTED_COLUMNS};
use crate::errors::ServerError;
use std::fs::File;
use std::path::Path;

/// Read the listings CSV into memory.
///
/// The header row is validated against the full expected column list before
/// any row is deserialized, so a missing or renamed column fails fast with
/// its name.
pub fn load_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>, ServerError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ServerError::CsvError(format!("Failed to open {}: {e}", path.display())))?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| ServerError::CsvError(format!("Failed to read header row: {e}")))?
        .clone();

    for expected in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == expected) {
            return Err(ServerError::MissingColumn(expected.to_string()));
        }
    }

    let mut listings = Vec::new();
    for result in reader.deserialize() {
        let listing: Listing = result.map_err(|e| ServerError::CsvError(e.to_string()))?;
        listings.push(listing);
    }

    if listings.is_empty() {
        return Err(ServerError::EmptyDataset);
    }

    Ok(listings)
}
