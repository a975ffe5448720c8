use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result ordering selected in the filter panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Featured first, then rating descending, then price ascending
    #[default]
    Recommended,
    PriceLow,
    PriceHigh,
    Rating,
    Name,
}

/// Inclusive nightly price bounds, `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Current filter panel selections
///
/// Owned by `FilterState`; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_text: String,
    /// Empty means no restriction
    pub star_set: BTreeSet<u8>,
    /// Empty means no restriction; otherwise every entry is required
    pub amenity_set: BTreeSet<String>,
    pub price_range: PriceRange,
    /// Product-configured range; `price_range` equal to it means no restriction
    pub default_price_range: PriceRange,
    pub sort_option: SortOption,
}

impl FilterCriteria {
    /// Criteria with every dimension at its default
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            search_text: String::new(),
            star_set: BTreeSet::new(),
            amenity_set: BTreeSet::new(),
            price_range,
            default_price_range: price_range,
            sort_option: SortOption::default(),
        }
    }

    /// Price bounds to enforce, or `None` while the range is at its default
    ///
    /// The default range only sets the slider extents. Listings priced
    /// outside it stay visible until the user narrows the range.
    pub fn price_filter(&self) -> Option<PriceRange> {
        (self.price_range != self.default_price_range).then_some(self.price_range)
    }

    /// Search text as matched: trimmed and lowercased
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}
