//! # sensorweb-core
//!
//! Foundation crate for sensor-web temporal values.
//! Defines the indeterminate markers, resolution traits, errors, config, and tracing setup.
//! `sensorweb-time` builds the value types on top of this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SensorwebConfig;
pub use errors::{SensorwebError, SensorwebResult, TimeError};
pub use models::{ExtendedMarker, IndeterminateMarker, Marker};
pub use traits::{Clock, ResolutionPolicy};
