//! ResolutionPolicy: turns indeterminate markers into concrete instants.

use chrono::{DateTime, Utc};

use crate::models::Marker;

/// Marker resolution policy.
///
/// Supplied by the caller because resolving `now`, `first`, or `latest` needs
/// context the value itself does not have (a clock, dataset bounds).
/// Returning `None` means the policy has no mapping for the marker.
pub trait ResolutionPolicy: Send + Sync {
    fn resolve(&self, marker: Marker) -> Option<DateTime<Utc>>;
}

impl<P: ResolutionPolicy + ?Sized> ResolutionPolicy for &P {
    fn resolve(&self, marker: Marker) -> Option<DateTime<Utc>> {
        (**self).resolve(marker)
    }
}

impl<P: ResolutionPolicy + ?Sized> ResolutionPolicy for Box<P> {
    fn resolve(&self, marker: Marker) -> Option<DateTime<Utc>> {
        (**self).resolve(marker)
    }
}
