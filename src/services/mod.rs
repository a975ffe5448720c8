// Service exports
pub mod listings;

pub use listings::{load_snapshot, normalize_listing, normalize_listings, parse_snapshot};
