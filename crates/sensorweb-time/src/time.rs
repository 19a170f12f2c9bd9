//! Time: an instant or a period, the right-hand side of instant comparison.

use serde::{Deserialize, Serialize};

use crate::metadata::TimeMetadata;
use crate::range::TemporalRange;
use crate::value::TemporalValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Time {
    Instant(TemporalValue),
    Period(TemporalRange),
}

impl Time {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Instant(value) => value.is_empty(),
            Self::Period(range) => range.is_empty(),
        }
    }

    /// Base-type state. Periods carry none.
    pub fn metadata(&self) -> Option<&TimeMetadata> {
        match self {
            Self::Instant(value) => Some(value.metadata()),
            Self::Period(_) => None,
        }
    }
}

impl From<TemporalValue> for Time {
    fn from(value: TemporalValue) -> Self {
        Self::Instant(value)
    }
}

impl From<TemporalRange> for Time {
    fn from(range: TemporalRange) -> Self {
        Self::Period(range)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instant(value) => std::fmt::Display::fmt(value, f),
            Self::Period(range) => std::fmt::Display::fmt(range, f),
        }
    }
}
