use geo::{coord, Intersects, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Unique listing identifier
pub type PropertyId = u64;

/// Approximate kilometres per degree of latitude
const KM_PER_DEGREE: f64 = 111.0;

/// A point on the map in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Active,
    Inactive,
}

/// Canonical listing record consumed by the discovery engine
///
/// Records reach the engine already normalized (see `services::listings`),
/// so every optional source field has a safe value here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price_per_night: f64,
    #[validate(range(min = 1, max = 5))]
    pub star_rating: u8,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: PropertyStatus,
}

impl PropertyRecord {
    pub fn is_active(&self) -> bool {
        self.status == PropertyStatus::Active
    }
}

/// Rectangular lat/lng region, edges in degrees
///
/// No antimeridian or pole wraparound: `west <= east` and `south <= north`
/// are assumed, which holds for a single-city map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Rectangle approximating a radius around a center point
    ///
    /// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude).
    /// Used to frame the map on a single listing.
    pub fn around(center: Coordinates, radius_km: f64) -> Self {
        let lat_delta = radius_km / KM_PER_DEGREE;
        let lng_delta = radius_km / (KM_PER_DEGREE * center.lat.to_radians().cos().abs());

        Self {
            north: center.lat + lat_delta,
            south: center.lat - lat_delta,
            east: center.lng + lng_delta,
            west: center.lng - lng_delta,
        }
    }

    /// Planar rectangle with x = longitude, y = latitude
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    /// Inclusive containment on all four edges
    #[inline]
    pub fn contains(&self, point: &Coordinates) -> bool {
        self.to_rect()
            .intersects(&coord! { x: point.lng, y: point.lat })
    }
}

/// Named rectangle used as a map shortcut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub bounds: GeoBounds,
}
