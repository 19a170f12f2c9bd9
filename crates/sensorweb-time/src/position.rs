//! Time position: the structure a textual formatter renders.
//!
//! Rendering itself lives with the encoder; this module only decides which
//! representation of a value gets rendered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sensorweb_core::{ExtendedMarker, IndeterminateMarker};

use crate::value::TemporalValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimePosition {
    /// Concrete instant with the formatting hints the requester supplied.
    Instant {
        time: DateTime<Utc>,
        requested_precision: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        time_format: Option<String>,
    },
    Indeterminate {
        marker: IndeterminateMarker,
    },
    Extended {
        marker: ExtendedMarker,
    },
}

impl TimePosition {
    pub fn is_indeterminate(&self) -> bool {
        !matches!(self, Self::Instant { .. })
    }
}

impl TemporalValue {
    /// What an encoder should write for this value.
    ///
    /// The primary marker wins over a concrete timestamp here, so a reading
    /// flagged `latest` is rendered as `latest`. The extended marker is used only
    /// when nothing else is set. `None` for an empty value.
    pub fn time_position(&self) -> Option<TimePosition> {
        if let Some(marker) = self.indeterminate() {
            return Some(TimePosition::Indeterminate { marker });
        }
        if let Some(time) = self.value() {
            return Some(TimePosition::Instant {
                time,
                requested_precision: self.requested_precision(),
                time_format: self.metadata().time_format.clone(),
            });
        }
        self.extended()
            .map(|marker| TimePosition::Extended { marker })
    }
}
