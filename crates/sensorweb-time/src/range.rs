//! TemporalRange: start/end bounds a value can be placed against.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A period with optional UTC bounds. Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<DateTime<Utc>>,
}

impl TemporalRange {
    /// Closed range; both bounds are normalized to UTC.
    pub fn new<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self {
            start: Some(start.with_timezone(&Utc)),
            end: Some(end.with_timezone(&Utc)),
        }
    }

    pub fn from_bounds(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Range with a start and no end.
    pub fn starting_at<Tz: TimeZone>(start: DateTime<Tz>) -> Self {
        Self::from_bounds(Some(start.with_timezone(&Utc)), None)
    }

    /// Range with an end and no start.
    pub fn ending_at<Tz: TimeZone>(end: DateTime<Tz>) -> Self {
        Self::from_bounds(None, Some(end.with_timezone(&Utc)))
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl std::fmt::Display for TemporalRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound = |b: Option<DateTime<Utc>>| b.map_or_else(|| "..".to_string(), |ts| ts.to_rfc3339());
        write!(f, "Time period: {}/{}", bound(self.start), bound(self.end))
    }
}
