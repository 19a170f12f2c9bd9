pub mod observability_config;
pub mod time_config;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use time_config::TimeConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SensorwebConfig {
    pub time: TimeConfig,
    pub observability: ObservabilityConfig,
}

impl SensorwebConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
