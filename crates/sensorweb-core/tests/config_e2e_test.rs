#![allow(clippy::field_reassign_with_default)]
//! E2E tests for config loading and error conversion.
//!
//! Every test targets a specific failure mode:
//! - Old config files missing newer fields must still load with defaults
//! - TOML sections map onto the subsystem structs
//! - Malformed TOML surfaces as a config error, not a panic

use sensorweb_core::config::{ObservabilityConfig, SensorwebConfig, TimeConfig};
use sensorweb_core::errors::{SensorwebError, TimeError};

// ═══════════════════════════════════════════════════════════════════════════
// TimeConfig: serde resilience
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn time_config_defaults_resolve_everything() {
    let config = TimeConfig::default();
    assert!(config.resolve_now);
    assert!(config.resolve_dataset_bounds);
    assert_eq!(config.default_requested_precision, 0);
    assert_eq!(config.default_time_format, None);
}

/// Partial JSON with only some fields should still deserialize (all others get defaults).
#[test]
fn partial_time_config_deserializes_with_defaults() {
    let json = r#"{ "resolve_now": false }"#;
    let config: TimeConfig = serde_json::from_str(json).unwrap();

    assert!(!config.resolve_now, "explicit field should be used");
    assert!(config.resolve_dataset_bounds, "missing field should get default");
}

#[test]
fn time_format_roundtrip() {
    let mut config = TimeConfig::default();
    config.default_time_format = Some("%Y-%m-%d".to_string());
    config.default_requested_precision = 3;

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: TimeConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized, config);
}

#[test]
fn empty_json_all_defaults() {
    let config: TimeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, TimeConfig::default());

    let config: ObservabilityConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ObservabilityConfig::default());
}

// ═══════════════════════════════════════════════════════════════════════════
// SensorwebConfig: TOML loading
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_toml_is_default_config() {
    let config = SensorwebConfig::from_toml("").unwrap();
    assert_eq!(config.time, TimeConfig::default());
    assert_eq!(config.observability.log_filter, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn toml_sections_populate_subsystems() {
    let toml = r#"
        [time]
        resolve_dataset_bounds = false
        default_requested_precision = 1
        default_time_format = "%Y"

        [observability]
        log_filter = "sensorweb_time=debug"
        json_logs = true
    "#;
    let config = SensorwebConfig::from_toml(toml).unwrap();

    assert!(config.time.resolve_now);
    assert!(!config.time.resolve_dataset_bounds);
    assert_eq!(config.time.default_requested_precision, 1);
    assert_eq!(config.time.default_time_format.as_deref(), Some("%Y"));
    assert_eq!(config.observability.log_filter, "sensorweb_time=debug");
    assert!(config.observability.json_logs);
}

#[test]
fn malformed_toml_converts_to_config_error() {
    let err = SensorwebConfig::from_toml("[time]\nresolve_now = \"sometimes\"").unwrap_err();
    let err: SensorwebError = err.into();
    assert!(matches!(err, SensorwebError::ConfigError(_)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn unresolvable_marker_message_names_marker() {
    let err = TimeError::UnresolvableMarker {
        marker: "latest".to_string(),
    };
    assert_eq!(err.to_string(), "unresolvable indeterminate marker: latest");

    let top: SensorwebError = err.into();
    assert_eq!(
        top.to_string(),
        "temporal error: unresolvable indeterminate marker: latest"
    );
}
