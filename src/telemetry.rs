use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{DiscoveryError, Result};

/// Install the global tracing subscriber for a host application
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// twice returns an error instead of panicking.
pub fn init_tracing(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| DiscoveryError::Telemetry(format!("Invalid log level {:?}: {}", settings.level, e)))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.compact().try_init()
    };

    installed.map_err(|e| DiscoveryError::Telemetry(e.to_string()))?;

    tracing::debug!("Tracing initialized (level: {}, format: {})", settings.level, settings.format);
    Ok(())
}
