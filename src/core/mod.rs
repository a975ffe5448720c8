// Core engine exports
pub mod comparison;
pub mod engine;
pub mod filter_state;
pub mod filters;
pub mod ranking;
pub mod viewport;
pub mod zones;

pub use comparison::{ComparisonSet, ComparisonState};
pub use engine::{DiscoveryResult, FilterEngine};
pub use filter_state::FilterState;
pub use filters::{matches_amenities, matches_criteria, matches_price_range, matches_search_text, matches_star_rating};
pub use ranking::{compare_properties, sort_properties};
pub use viewport::{is_within_viewport, restrict_to_viewport};
pub use zones::{builtin_zones, ZoneCatalog};
