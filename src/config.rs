use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::core::{ComparisonSet, FilterState, ZoneCatalog};
use crate::error::{DiscoveryError, Result};
use crate::models::{PriceRange, ZoneDefinition};

/// Discovery engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub discovery: DiscoverySettings,
    #[serde(default)]
    pub source: SourceSettings,
    /// Replaces the built-in zone catalog when present
    #[serde(default)]
    pub zones: Option<Vec<ZoneDefinition>>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_price_defaults"))]
pub struct DiscoverySettings {
    #[serde(default = "default_price_min")]
    #[validate(range(min = 0.0))]
    pub price_min: f64,
    #[serde(default = "default_price_max")]
    #[validate(range(min = 0.0))]
    pub price_max: f64,
    #[serde(default = "default_comparison_capacity")]
    #[validate(range(min = 1, max = 10))]
    pub comparison_capacity: usize,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            price_min: default_price_min(),
            price_max: default_price_max(),
            comparison_capacity: default_comparison_capacity(),
        }
    }
}

fn default_price_min() -> f64 { 0.0 }
fn default_price_max() -> f64 { 50000.0 }
fn default_comparison_capacity() -> usize { 3 }

fn validate_price_defaults(settings: &DiscoverySettings) -> std::result::Result<(), ValidationError> {
    if settings.price_min > settings.price_max {
        return Err(ValidationError::new("price_min_exceeds_price_max"));
    }
    Ok(())
}

/// Data-access boundary options
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceSettings {
    /// Keep listings whose status is inactive
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STAY__)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STAY__DISCOVERY__COMPARISON_CAPACITY -> discovery.comparison_capacity
            .add_source(env_source())
            .build()?;

        Self::from_config(config)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check semantic constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.discovery
            .validate()
            .map_err(|e| DiscoveryError::Config(ConfigError::Message(e.to_string())))?;

        if let Some(zones) = &self.zones {
            for zone in zones {
                if zone.bounds.south > zone.bounds.north || zone.bounds.west > zone.bounds.east {
                    return Err(DiscoveryError::Config(ConfigError::Message(format!(
                        "zone {} has inverted bounds",
                        zone.id
                    ))));
                }
            }
        }

        Ok(())
    }

    pub fn default_price_range(&self) -> PriceRange {
        PriceRange::new(self.discovery.price_min, self.discovery.price_max)
    }

    pub fn comparison_capacity(&self) -> usize {
        self.discovery.comparison_capacity
    }

    /// Fresh filter state seeded with the configured default price range
    pub fn filter_state(&self) -> Result<FilterState> {
        FilterState::new(self.default_price_range())
    }

    /// Empty comparison set with the configured capacity
    pub fn comparison_set(&self) -> Result<ComparisonSet> {
        ComparisonSet::new(self.comparison_capacity())
    }

    /// Configured zones, or the built-in catalog when none are set
    pub fn zone_catalog(&self) -> ZoneCatalog {
        match &self.zones {
            Some(zones) => ZoneCatalog::new(zones.clone()),
            None => ZoneCatalog::builtin(),
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("STAY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
