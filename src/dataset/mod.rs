pub mod listing;
pub mod loader;

pub use listing::Listing;
pub use loader::load_listings;
