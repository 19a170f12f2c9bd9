//! TemporalValue: a time instant that may be concrete, indeterminate, or both.

mod equality;
mod resolve;

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use sensorweb_core::config::TimeConfig;
use sensorweb_core::{ExtendedMarker, IndeterminateMarker};

use crate::metadata::TimeMetadata;

/// A single time instant.
///
/// Three independent optionals rather than a sum type: a timestamp may carry
/// an indeterminate annotation (a reading flagged `latest`), and the extended
/// marker travels next to the primary one. Comparison prefers the concrete
/// timestamp whenever one is present.
///
/// # Invariants
/// - `value` is UTC; every constructor and setter normalizes.
/// - No representation is required. A value with nothing set is empty.
///
/// Setters exist for builders that fill a value in stages. Once a value is
/// shared across threads, treat it as immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    indeterminate: Option<IndeterminateMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extended: Option<ExtendedMarker>,
    requested_precision: i32,
    #[serde(skip_serializing_if = "TimeMetadata::is_empty")]
    metadata: TimeMetadata,
}

impl TemporalValue {
    /// A value with no timestamp and no markers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A concrete instant, normalized to UTC.
    pub fn from_timestamp<Tz: TimeZone>(timestamp: DateTime<Tz>) -> Self {
        Self {
            value: Some(timestamp.with_timezone(&Utc)),
            ..Self::default()
        }
    }

    pub fn from_indeterminate(marker: IndeterminateMarker) -> Self {
        Self {
            indeterminate: Some(marker),
            ..Self::default()
        }
    }

    /// Sets the extended marker only; the primary marker stays unset.
    pub fn from_extended(marker: ExtendedMarker) -> Self {
        Self {
            extended: Some(marker),
            ..Self::default()
        }
    }

    /// Timestamp plus indeterminate annotation. A missing timestamp leaves
    /// only the marker.
    pub fn from_timestamp_with_indeterminate(
        timestamp: Option<DateTime<Utc>>,
        marker: IndeterminateMarker,
    ) -> Self {
        Self {
            value: timestamp,
            indeterminate: Some(marker),
            ..Self::default()
        }
    }

    /// From a wall-clock date. `None` is a valid input and yields `unknown`.
    ///
    /// Dates outside chrono's representable range saturate to
    /// `DateTime::<Utc>::MAX_UTC` or `DateTime::<Utc>::MIN_UTC`.
    pub fn from_wall_clock_date(date: Option<SystemTime>) -> Self {
        match date {
            Some(date) => Self::from_timestamp(system_time_to_utc(date)),
            None => Self::from_indeterminate(IndeterminateMarker::Unknown),
        }
    }

    /// A concrete instant stamped with the configured precision and format.
    pub fn from_timestamp_with_config<Tz: TimeZone>(
        timestamp: DateTime<Tz>,
        config: &TimeConfig,
    ) -> Self {
        Self::from_timestamp(timestamp)
            .with_requested_precision(config.default_requested_precision)
            .with_time_format(config.default_time_format.clone())
    }

    // ── Builders ─────────────────────────────────────────────────────────────

    pub fn with_extended(mut self, marker: ExtendedMarker) -> Self {
        self.extended = Some(marker);
        self
    }

    pub fn with_requested_precision(mut self, precision: i32) -> Self {
        self.requested_precision = precision;
        self
    }

    pub fn with_gml_id(mut self, gml_id: impl Into<String>) -> Self {
        self.metadata.gml_id = Some(gml_id.into());
        self
    }

    pub fn with_time_format(mut self, time_format: Option<String>) -> Self {
        self.metadata.time_format = time_format;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The concrete instant, if any. Never resolves markers; see [`Self::resolve`].
    pub fn value(&self) -> Option<DateTime<Utc>> {
        self.value
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn indeterminate(&self) -> Option<IndeterminateMarker> {
        self.indeterminate
    }

    pub fn has_indeterminate(&self) -> bool {
        self.indeterminate.is_some()
    }

    /// True when the primary marker is set and equals `marker`.
    pub fn is_indeterminate_equal_to(&self, marker: IndeterminateMarker) -> bool {
        self.indeterminate == Some(marker)
    }

    pub fn extended(&self) -> Option<ExtendedMarker> {
        self.extended
    }

    pub fn has_extended(&self) -> bool {
        self.extended.is_some()
    }

    /// Significant timestamp components the requester asked for. Formatting only.
    pub fn requested_precision(&self) -> i32 {
        self.requested_precision
    }

    pub fn metadata(&self) -> &TimeMetadata {
        &self.metadata
    }

    /// No timestamp, no markers, and no base-type state.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.indeterminate.is_none()
            && self.extended.is_none()
            && self.metadata.is_empty()
    }

    // ── Setters ──────────────────────────────────────────────────────────────

    pub fn set_value<Tz: TimeZone>(&mut self, value: Option<DateTime<Tz>>) -> &mut Self {
        self.value = value.map(|ts| ts.with_timezone(&Utc));
        self
    }

    pub fn set_indeterminate(&mut self, marker: Option<IndeterminateMarker>) -> &mut Self {
        self.indeterminate = marker;
        self
    }

    pub fn set_extended(&mut self, marker: Option<ExtendedMarker>) -> &mut Self {
        self.extended = marker;
        self
    }

    pub fn set_requested_precision(&mut self, precision: i32) -> &mut Self {
        self.requested_precision = precision;
        self
    }
}

/// `SystemTime` to UTC without chrono's panicking `From` impl.
fn system_time_to_utc(date: SystemTime) -> DateTime<Utc> {
    match date.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs())
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, after.subsec_nanos()))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
        Err(err) => {
            let before = err.duration();
            i64::try_from(before.as_secs())
                .ok()
                .and_then(|secs| match before.subsec_nanos() {
                    0 => DateTime::<Utc>::from_timestamp(-secs, 0),
                    nanos => DateTime::<Utc>::from_timestamp(-secs - 1, 1_000_000_000 - nanos),
                })
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        }
    }
}

impl std::fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if let Some(value) = self.value {
            parts.push(value.to_rfc3339());
        }
        if let Some(marker) = self.indeterminate {
            parts.push(marker.to_string());
        }
        if let Some(marker) = self.extended {
            parts.push(format!("extended:{marker}"));
        }
        if parts.is_empty() {
            return f.write_str("Time instant: empty");
        }
        write!(f, "Time instant: {}", parts.join(", "))
    }
}
