//! Marker resolution for [`TemporalValue`].

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use sensorweb_core::{Marker, ResolutionPolicy, TimeError};

use super::TemporalValue;

impl TemporalValue {
    /// The effective instant of this value.
    ///
    /// Returns the concrete timestamp when set. Otherwise the policy is asked for
    /// the primary marker, then the extended marker. A value the policy cannot
    /// place fails with [`TimeError::UnresolvableMarker`]; nothing is defaulted.
    pub fn resolve<P: ResolutionPolicy + ?Sized>(&self, policy: &P) -> Result<DateTime<Utc>, TimeError> {
        if let Some(value) = self.value {
            return Ok(value);
        }

        let primary = self.indeterminate.map(Marker::from);
        let extended = self.extended.map(Marker::from);

        for marker in primary.into_iter().chain(extended) {
            if let Some(resolved) = policy.resolve(marker) {
                debug!(%marker, %resolved, "resolved indeterminate marker");
                return Ok(resolved);
            }
        }

        // Report the marker the caller would render, primary first.
        let marker = primary.or(extended).map_or("none", |m| m.name()).to_string();
        warn!(%marker, "no resolution for indeterminate marker");
        Err(TimeError::UnresolvableMarker { marker })
    }
}
