//! Named map shortcuts for the single-city scope.
//!
//! The built-in catalog frames well-known areas of Mount Abu. Selecting a
//! zone yields its bounds for the viewport filter; selecting the active zone
//! again clears the restriction.

use crate::error::{DiscoveryError, Result};
use crate::models::{GeoBounds, ZoneDefinition};

/// Compile-time zone entry, converted into an owned `ZoneDefinition`
struct ZoneSeed {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    bounds: GeoBounds,
}

const BUILTIN_ZONES: &[ZoneSeed] = &[
    ZoneSeed {
        id: "nakki-lake",
        label: "Nakki Lake",
        description: "Lakeside promenade, boating and the busiest hotel strip",
        bounds: GeoBounds { north: 24.5990, south: 24.5880, east: 72.7120, west: 72.6990 },
    },
    ZoneSeed {
        id: "town-centre",
        label: "Town Centre",
        description: "Main bazaar, Polo Ground and the bus stand",
        bounds: GeoBounds { north: 24.6000, south: 24.5800, east: 72.7300, west: 72.7000 },
    },
    ZoneSeed {
        id: "sunset-point",
        label: "Sunset Point",
        description: "Western ridge viewpoints and quieter cottages",
        bounds: GeoBounds { north: 24.5920, south: 24.5800, east: 72.7050, west: 72.6920 },
    },
    ZoneSeed {
        id: "dilwara",
        label: "Dilwara Temples",
        description: "Jain temple complex north-east of town",
        bounds: GeoBounds { north: 24.6160, south: 24.6030, east: 72.7310, west: 72.7160 },
    },
    ZoneSeed {
        id: "guru-shikhar",
        label: "Guru Shikhar",
        description: "Highest peak of the Aravallis and the observatory road",
        bounds: GeoBounds { north: 24.6560, south: 24.6420, east: 72.7860, west: 72.7720 },
    },
    ZoneSeed {
        id: "achalgarh",
        label: "Achalgarh",
        description: "Fort ruins and Achaleshwar Mahadev temple",
        bounds: GeoBounds { north: 24.6220, south: 24.6080, east: 72.7850, west: 72.7700 },
    },
];

/// Built-in zone list for the single-city scope
pub fn builtin_zones() -> Vec<ZoneDefinition> {
    BUILTIN_ZONES
        .iter()
        .map(|seed| ZoneDefinition {
            id: seed.id.to_string(),
            label: seed.label.to_string(),
            description: seed.description.to_string(),
            bounds: seed.bounds,
        })
        .collect()
}

/// Read-only zone list plus the single active selection
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    zones: Vec<ZoneDefinition>,
    active: Option<String>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<ZoneDefinition>) -> Self {
        Self { zones, active: None }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_zones())
    }

    pub fn zones(&self) -> &[ZoneDefinition] {
        &self.zones
    }

    pub fn get(&self, id: &str) -> Option<&ZoneDefinition> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    pub fn active_zone(&self) -> Option<&ZoneDefinition> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    /// Select a zone and return the bounds the viewport should use
    ///
    /// Re-selecting the active zone deactivates it and returns `Ok(None)`,
    /// lifting the viewport restriction. Unknown ids leave the selection
    /// unchanged.
    pub fn select_zone(&mut self, id: &str) -> Result<Option<GeoBounds>> {
        if self.active.as_deref() == Some(id) {
            tracing::trace!("Zone {} deselected", id);
            self.active = None;
            return Ok(None);
        }

        let bounds = self
            .get(id)
            .map(|zone| zone.bounds)
            .ok_or_else(|| DiscoveryError::UnknownZone(id.to_string()))?;

        tracing::trace!("Zone {} selected", id);
        self.active = Some(id.to_string());
        Ok(Some(bounds))
    }

    /// Drop the active zone, e.g. after the user pans the map by hand
    pub fn clear_selection(&mut self) {
        self.active = None;
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
