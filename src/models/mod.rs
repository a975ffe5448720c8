// Model exports
pub mod criteria;
pub mod domain;

pub use criteria::{FilterCriteria, PriceRange, SortOption};
pub use domain::{Coordinates, GeoBounds, PropertyId, PropertyRecord, PropertyStatus, ZoneDefinition};
