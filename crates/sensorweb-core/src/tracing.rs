//! Tracing subscriber setup for hosts embedding the sensor-web crates.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::errors::{SensorwebError, SensorwebResult};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `config.log_filter` when set. A second call returns
/// `SensorwebError::TracingInit` rather than replacing the installed subscriber.
pub fn init_tracing(config: &ObservabilityConfig) -> SensorwebResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| SensorwebError::TracingInit(e.to_string()))?;

    let builder = fmt().with_env_filter(filter);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| SensorwebError::TracingInit(e.to_string()))?;

    ::tracing::debug!(
        filter = %config.log_filter,
        json = config.json_logs,
        "tracing initialized"
    );
    Ok(())
}
