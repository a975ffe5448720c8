use crate::models::{FilterCriteria, PropertyRecord};
use std::collections::BTreeSet;

/// Case-insensitive substring match against name, location, description
/// or any amenity
///
/// `needle` must already be lowercased; `None` matches everything.
#[inline]
pub fn matches_search_text(property: &PropertyRecord, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };

    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&property.name)
        || contains(&property.location)
        || property.description.as_deref().is_some_and(contains)
        || property.amenities.iter().any(|amenity| contains(amenity.as_str()))
}

/// Star filter: an empty set admits every property
#[inline]
pub fn matches_star_rating(property: &PropertyRecord, star_set: &BTreeSet<u8>) -> bool {
    star_set.is_empty() || star_set.contains(&property.star_rating)
}

/// Amenity filter with AND semantics: every selected amenity is required
#[inline]
pub fn matches_amenities(property: &PropertyRecord, amenity_set: &BTreeSet<String>) -> bool {
    amenity_set.is_subset(&property.amenities)
}

/// Inclusive nightly price check; the default range admits every property
#[inline]
pub fn matches_price_range(property: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    criteria
        .price_filter()
        .map_or(true, |range| range.contains(property.price_per_night))
}

/// All per-dimension predicates combined with logical AND
///
/// `needle` is `criteria.search_needle()`, computed once per filter pass
/// instead of once per property.
#[inline]
pub fn matches_criteria(
    property: &PropertyRecord,
    criteria: &FilterCriteria,
    needle: Option<&str>,
) -> bool {
    matches_star_rating(property, &criteria.star_set)
        && matches_amenities(property, &criteria.amenity_set)
        && matches_price_range(property, criteria)
        && matches_search_text(property, needle)
}
