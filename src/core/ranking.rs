use crate::models::{PropertyRecord, SortOption};
use std::borrow::Borrow;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Order two properties under the given sort option
///
/// Returns `Equal` for tied keys so a stable sort keeps input order.
///
/// Ordering rules:
/// - recommended: featured first, then rating descending, then price ascending
/// - price_low / price_high: nightly price ascending / descending
/// - rating: rating descending
/// - name: accent- and case-folded lexicographic ascending
pub fn compare_properties(a: &PropertyRecord, b: &PropertyRecord, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Recommended => b
            .featured
            .cmp(&a.featured)
            .then_with(|| b.rating.total_cmp(&a.rating))
            .then_with(|| a.price_per_night.total_cmp(&b.price_per_night)),
        SortOption::PriceLow => a.price_per_night.total_cmp(&b.price_per_night),
        SortOption::PriceHigh => b.price_per_night.total_cmp(&a.price_per_night),
        SortOption::Rating => b.rating.total_cmp(&a.rating),
        SortOption::Name => compare_names(&a.name, &b.name),
    }
}

/// Locale-style name comparison
///
/// Names are decomposed (NFD), combining marks dropped and letters
/// lowercased, so "Éden" sorts with "Eden" before "Fern" and "alpine"
/// sorts before "Bougainvillea".
#[inline]
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(collation_key(b))
}

fn collation_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Stable in-place sort of a result list
pub fn sort_properties<T: Borrow<PropertyRecord>>(properties: &mut [T], sort: SortOption) {
    // slice::sort_by is stable
    properties.sort_by(|a, b| compare_properties(a.borrow(), b.borrow(), sort));
}
