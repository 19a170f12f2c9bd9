//! Temporal value configuration.

use serde::{Deserialize, Serialize};

/// Configuration for temporal value construction and marker resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// `now` resolves through the injected clock.
    pub resolve_now: bool,
    /// `first`/`latest` resolve through dataset bounds when the caller supplies them.
    pub resolve_dataset_bounds: bool,

    /// Precision hint stamped on values built from config (0 = full datetime).
    pub default_requested_precision: i32,
    /// Time format pattern handed to the position formatter.
    pub default_time_format: Option<String>,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            resolve_now: true,
            resolve_dataset_bounds: true,
            default_requested_precision: 0,
            default_time_format: None,
        }
    }
}
