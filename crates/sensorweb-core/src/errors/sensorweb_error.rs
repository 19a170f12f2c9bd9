use super::TimeError;

/// Top-level error type for the sensor-web time crates.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum SensorwebError {
    #[error("temporal error: {0}")]
    TimeError(#[from] TimeError),

    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("tracing init error: {0}")]
    TracingInit(String),
}

/// Convenience type alias.
pub type SensorwebResult<T> = Result<T, SensorwebError>;
