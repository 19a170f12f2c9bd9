//! Weak ordering of temporal values.
//!
//! Only concrete instants can be ordered. Anything else compares as
//! `Ordering::Equal`, which here means "equal or incomparable": a marker-only
//! value ties with everything, so the relation is not transitive and
//! `TemporalValue` does not implement `PartialOrd` or `Ord`.

use std::cmp::Ordering;

use crate::range::TemporalRange;
use crate::time::Time;
use crate::value::TemporalValue;

impl TemporalValue {
    /// Place this value relative to an instant or a period.
    pub fn compare(&self, other: &Time) -> Ordering {
        match other {
            Time::Instant(value) => self.compare_value(value),
            Time::Period(range) => self.compare_range(range),
        }
    }

    /// `Less`/`Greater` when both sides are concrete, `Equal` otherwise.
    pub fn compare_value(&self, other: &TemporalValue) -> Ordering {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    }

    /// `Less` before the start, `Greater` after the end, `Equal` inside.
    ///
    /// Needs a concrete value and both bounds; an open-ended range never
    /// places a value outside it.
    pub fn compare_range(&self, range: &TemporalRange) -> Ordering {
        match (self.value(), range.start(), range.end()) {
            (Some(value), Some(start), Some(_)) if value < start => Ordering::Less,
            (Some(value), Some(_), Some(end)) if value > end => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

/// Stable sort by concrete instant.
///
/// Concrete values come first in ascending order; values without a timestamp
/// keep their relative order after them. A comparator built on
/// [`TemporalValue::compare_value`] is not a total order and cannot be handed
/// to `sort_by`.
pub fn sort_by_time(values: &mut [TemporalValue]) {
    values.sort_by_key(|v| (v.value().is_none(), v.value()));
}
