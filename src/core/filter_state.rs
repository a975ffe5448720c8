use crate::error::{DiscoveryError, Result};
use crate::models::{FilterCriteria, PriceRange, SortOption};

/// Host-owned filter panel state
///
/// All mutation goes through the named transition methods below; the
/// engine only ever sees `criteria()`. The default price range is injected
/// at construction so products can configure it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    criteria: FilterCriteria,
}

impl FilterState {
    /// Create state with every dimension at its default
    ///
    /// Fails with `InvalidRange` if the default range itself is inverted.
    pub fn new(default_price_range: PriceRange) -> Result<Self> {
        validate_range(default_price_range.min, default_price_range.max)?;

        Ok(Self {
            criteria: FilterCriteria::with_price_range(default_price_range),
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn default_price_range(&self) -> PriceRange {
        self.criteria.default_price_range
    }

    /// Store the raw search text
    ///
    /// Matching trims surrounding whitespace, so `"lake "` finds "Lake" and
    /// whitespace-only text neither filters nor counts as an active filter.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
    }

    /// Flip membership of a star rating; returns whether it is now selected
    pub fn toggle_star(&mut self, stars: u8) -> bool {
        let selected = if self.criteria.star_set.remove(&stars) {
            false
        } else {
            self.criteria.star_set.insert(stars)
        };
        tracing::trace!("Star {} selected: {}", stars, selected);
        selected
    }

    /// Flip membership of an amenity; returns whether it is now selected
    pub fn toggle_amenity(&mut self, name: &str) -> bool {
        let selected = if self.criteria.amenity_set.remove(name) {
            false
        } else {
            self.criteria.amenity_set.insert(name.to_string())
        };
        tracing::trace!("Amenity {} selected: {}", name, selected);
        selected
    }

    /// Set the inclusive nightly price range
    ///
    /// Inverted, negative or non-finite bounds are rejected with
    /// `InvalidRange` and the current range is kept. Bounds are never clamped.
    pub fn set_price_range(&mut self, min: f64, max: f64) -> Result<()> {
        validate_range(min, max)?;
        self.criteria.price_range = PriceRange::new(min, max);
        Ok(())
    }

    pub fn set_sort_option(&mut self, sort: SortOption) {
        self.criteria.sort_option = sort;
    }

    /// Reset every dimension to its default in a single assignment
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::with_price_range(self.criteria.default_price_range);
    }

    /// Number of filter dimensions differing from their default
    ///
    /// Search text, stars, amenities and price each count at most once.
    /// Sort order is not a filter and never counts. Price counts exactly
    /// when the engine enforces it.
    pub fn active_filter_count(&self) -> usize {
        let criteria = &self.criteria;
        [
            criteria.search_needle().is_some(),
            !criteria.star_set.is_empty(),
            !criteria.amenity_set.is_empty(),
            criteria.price_filter().is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_default(&self) -> bool {
        self.active_filter_count() == 0
    }
}

fn validate_range(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
        return Err(DiscoveryError::InvalidRange { min, max });
    }
    Ok(())
}
