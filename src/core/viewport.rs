use crate::models::{GeoBounds, PropertyRecord};
use std::borrow::Borrow;

/// Check if a property is visible inside the map viewport
///
/// Properties without coordinates are never visible while bounds are active.
#[inline]
pub fn is_within_viewport(property: &PropertyRecord, bounds: &GeoBounds) -> bool {
    property
        .coordinates
        .is_some_and(|point| bounds.contains(&point))
}

/// Restrict results to the current map viewport
///
/// `None` means the map has not reported its bounds yet: the input is
/// returned unchanged rather than emptied. Relative order is preserved.
pub fn restrict_to_viewport<T: Borrow<PropertyRecord>>(
    properties: Vec<T>,
    bounds: Option<&GeoBounds>,
) -> Vec<T> {
    let Some(bounds) = bounds else {
        return properties;
    };

    let before = properties.len();
    let visible: Vec<T> = properties
        .into_iter()
        .filter(|property| is_within_viewport(property.borrow(), bounds))
        .collect();

    tracing::trace!(
        "Viewport {:?} kept {} of {} properties",
        bounds,
        visible.len(),
        before
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, PropertyStatus};
    use std::collections::BTreeSet;

    fn create_test_property(id: u64, coordinates: Option<(f64, f64)>) -> PropertyRecord {
        PropertyRecord {
            id,
            name: format!("Property {}", id),
            location: "Mount Abu".to_string(),
            description: None,
            price_per_night: 1500.0,
            star_rating: 3,
            rating: 4.0,
            review_count: 0,
            amenities: BTreeSet::new(),
            coordinates: coordinates.map(|(lat, lng)| Coordinates::new(lat, lng)),
            featured: false,
            status: PropertyStatus::Active,
        }
    }

    fn test_bounds() -> GeoBounds {
        GeoBounds::new(24.60, 24.58, 72.73, 72.70)
    }

    #[test]
    fn test_point_within_viewport() {
        let bounds = test_bounds();

        assert!(is_within_viewport(&create_test_property(1, Some((24.59, 72.715))), &bounds));
        assert!(!is_within_viewport(&create_test_property(2, Some((24.65, 72.70))), &bounds));
        assert!(!is_within_viewport(&create_test_property(3, None), &bounds));
    }

    #[test]
    fn test_no_bounds_is_pass_through() {
        let properties = vec![
            create_test_property(1, None),
            create_test_property(2, Some((10.0, 10.0))),
        ];

        let result = restrict_to_viewport(properties.clone(), None);

        assert_eq!(result, properties);
    }

    #[test]
    fn test_restrict_keeps_order() {
        let bounds = test_bounds();
        let properties = vec![
            create_test_property(1, Some((24.599, 72.729))),
            create_test_property(2, None),
            create_test_property(3, Some((24.65, 72.70))),
            create_test_property(4, Some((24.581, 72.701))),
        ];

        let result = restrict_to_viewport(properties, Some(&bounds));
        let ids: Vec<u64> = result.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 4]);
    }
}
