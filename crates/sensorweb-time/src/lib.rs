//! # sensorweb-time
//!
//! Temporal values for observation timestamps.
//! A [`TemporalValue`] carries a concrete UTC instant, an indeterminate marker,
//! a protocol-specific extended marker, or any overlap of the three. Values
//! compare under a weak ordering, against each other or against a
//! [`TemporalRange`], and resolve markers through an injected policy.

pub mod metadata;
pub mod ordering;
pub mod position;
pub mod range;
pub mod resolution;
pub mod time;
pub mod value;

pub use metadata::TimeMetadata;
pub use ordering::sort_by_time;
pub use position::TimePosition;
pub use range::TemporalRange;
pub use resolution::{DatasetBounds, FixedClock, NoResolution, StandardResolutionPolicy, SystemClock};
pub use time::Time;
pub use value::TemporalValue;

pub use sensorweb_core::{ExtendedMarker, IndeterminateMarker, Marker, TimeError};
