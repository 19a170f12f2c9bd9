//! Resolution policy implementations.
//!
//! `unknown`, `before`, `after`, and `template` never resolve: they do not name
//! an instant, only a relation or a placeholder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sensorweb_core::config::TimeConfig;
use sensorweb_core::{Clock, ExtendedMarker, IndeterminateMarker, Marker, ResolutionPolicy};

/// Resolves nothing. Values must carry a concrete timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolution;

impl ResolutionPolicy for NoResolution {
    fn resolve(&self, _marker: Marker) -> Option<DateTime<Utc>> {
        None
    }
}

/// Earliest and latest phenomenon time of the dataset being queried.
///
/// Maps `first` and `latest` of either marker kind. A missing bound leaves the
/// corresponding marker unresolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetBounds {
    pub first: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
}

impl DatasetBounds {
    pub fn new(first: DateTime<Utc>, latest: DateTime<Utc>) -> Self {
        Self {
            first: Some(first),
            latest: Some(latest),
        }
    }
}

impl ResolutionPolicy for DatasetBounds {
    fn resolve(&self, marker: Marker) -> Option<DateTime<Utc>> {
        match marker {
            Marker::Indeterminate(IndeterminateMarker::First)
            | Marker::Extended(ExtendedMarker::First) => self.first,
            Marker::Indeterminate(IndeterminateMarker::Latest)
            | Marker::Extended(ExtendedMarker::Latest) => self.latest,
            Marker::Indeterminate(_) => None,
        }
    }
}

/// Clock for `now`, dataset bounds for `first`/`latest`, each switchable by config.
#[derive(Debug, Clone)]
pub struct StandardResolutionPolicy<C: Clock> {
    clock: C,
    bounds: Option<DatasetBounds>,
    resolve_now: bool,
    resolve_dataset_bounds: bool,
}

impl<C: Clock> StandardResolutionPolicy<C> {
    /// Resolves `now` only; add bounds with [`Self::with_bounds`].
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            bounds: None,
            resolve_now: true,
            resolve_dataset_bounds: true,
        }
    }

    pub fn from_config(config: &TimeConfig, clock: C, bounds: Option<DatasetBounds>) -> Self {
        Self {
            clock,
            bounds,
            resolve_now: config.resolve_now,
            resolve_dataset_bounds: config.resolve_dataset_bounds,
        }
    }

    pub fn with_bounds(mut self, bounds: DatasetBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn bounds(&self) -> Option<&DatasetBounds> {
        self.bounds.as_ref()
    }
}

impl<C: Clock> ResolutionPolicy for StandardResolutionPolicy<C> {
    fn resolve(&self, marker: Marker) -> Option<DateTime<Utc>> {
        match marker {
            Marker::Indeterminate(IndeterminateMarker::Now) => {
                self.resolve_now.then(|| self.clock.now())
            }
            _ if self.resolve_dataset_bounds => self.bounds.as_ref()?.resolve(marker),
            _ => None,
        }
    }
}
