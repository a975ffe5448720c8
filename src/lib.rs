//! Stay Discovery - property discovery engine for the stay listing site
//!
//! This library provides the search side of the site: multi-criteria
//! filtering, map viewport containment, result ranking, and a bounded
//! side-by-side comparison set. Everything here is synchronous and pure;
//! the host owns the filter and comparison state and supplies an
//! already-fetched candidate snapshot on every pass.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{ComparisonSet, ComparisonState, DiscoveryResult, FilterEngine, FilterState, ZoneCatalog, restrict_to_viewport};
pub use error::{DiscoveryError, ListingError};
pub use models::{Coordinates, FilterCriteria, GeoBounds, PriceRange, PropertyId, PropertyRecord, PropertyStatus, SortOption, ZoneDefinition};
