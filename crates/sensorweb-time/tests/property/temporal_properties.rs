//! Property tests for temporal value ordering, equality, and hashing.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sensorweb_time::{
    sort_by_time, ExtendedMarker, IndeterminateMarker, TemporalRange, TemporalValue,
};

// =============================================================================
// Strategy helpers
// =============================================================================

/// Instants between 1970 and ~2100, second resolution.
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn marker_strategy() -> impl Strategy<Value = IndeterminateMarker> {
    prop::sample::select(IndeterminateMarker::all().to_vec())
}

fn extended_strategy() -> impl Strategy<Value = ExtendedMarker> {
    prop::sample::select(ExtendedMarker::all().to_vec())
}

/// Any combination of the three representations, including empty.
fn value_strategy() -> impl Strategy<Value = TemporalValue> {
    (
        prop::option::of(instant_strategy()),
        prop::option::of(marker_strategy()),
        prop::option::of(extended_strategy()),
    )
        .prop_map(|(instant, marker, extended)| {
            let mut value = TemporalValue::empty();
            value
                .set_value(instant)
                .set_indeterminate(marker)
                .set_extended(extended);
            value
        })
}

fn hash_of(value: &TemporalValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Ordering
// =============================================================================

proptest! {
    #[test]
    fn prop_concrete_ordering_follows_instants(a in instant_strategy(), b in instant_strategy()) {
        let va = TemporalValue::from_timestamp(a);
        let vb = TemporalValue::from_timestamp(b);
        prop_assert_eq!(va.compare_value(&vb), a.cmp(&b));
        prop_assert_eq!(vb.compare_value(&va), a.cmp(&b).reverse());
    }

    #[test]
    fn prop_concrete_self_compare_is_equal(a in instant_strategy()) {
        let v = TemporalValue::from_timestamp(a);
        prop_assert_eq!(v.compare_value(&v), Ordering::Equal);
    }

    #[test]
    fn prop_value_without_timestamp_ties_with_everything(
        marker in marker_strategy(),
        other in value_strategy(),
    ) {
        let v = TemporalValue::from_indeterminate(marker);
        prop_assert_eq!(v.compare_value(&other), Ordering::Equal);
        prop_assert_eq!(other.compare_value(&v), Ordering::Equal);
    }

    #[test]
    fn prop_range_placement(
        start in instant_strategy(),
        len_secs in 0i64..10_000_000,
        probe in instant_strategy(),
    ) {
        let end = start + Duration::seconds(len_secs);
        let range = TemporalRange::new(start, end);
        let expected = if probe < start {
            Ordering::Less
        } else if probe > end {
            Ordering::Greater
        } else {
            Ordering::Equal
        };
        prop_assert_eq!(TemporalValue::from_timestamp(probe).compare_range(&range), expected);
    }

    #[test]
    fn prop_open_range_is_always_equal(start in instant_strategy(), probe in instant_strategy()) {
        let v = TemporalValue::from_timestamp(probe);
        prop_assert_eq!(v.compare_range(&TemporalRange::starting_at(start)), Ordering::Equal);
        prop_assert_eq!(v.compare_range(&TemporalRange::ending_at(start)), Ordering::Equal);
    }

    #[test]
    fn prop_sort_is_ascending_with_markers_last(values in prop::collection::vec(value_strategy(), 0..40)) {
        let mut sorted = values.clone();
        sort_by_time(&mut sorted);

        prop_assert_eq!(sorted.len(), values.len());
        let concrete: Vec<_> = sorted.iter().take_while(|v| v.has_value()).collect();
        prop_assert!(sorted[concrete.len()..].iter().all(|v| !v.has_value()));
        for pair in concrete.windows(2) {
            prop_assert_ne!(pair[0].compare_value(pair[1]), Ordering::Greater);
        }
    }
}

// =============================================================================
// Equality & hashing
// =============================================================================

proptest! {
    #[test]
    fn prop_marker_equality_matches_marker(m1 in marker_strategy(), m2 in marker_strategy()) {
        let a = TemporalValue::from_indeterminate(m1);
        let b = TemporalValue::from_indeterminate(m2);
        prop_assert_eq!(a == b, m1 == m2);
    }

    #[test]
    fn prop_equality_is_symmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn prop_value_with_any_representation_is_reflexive(a in value_strategy()) {
        prop_assume!(a.has_value() || a.has_indeterminate() || a.has_extended());
        prop_assert!(a == a.clone());
    }

    /// Equal values hash identically whenever both sides carry a timestamp or
    /// neither does.
    #[test]
    fn prop_equal_values_hash_identically(a in value_strategy(), b in value_strategy()) {
        prop_assume!(a.has_value() == b.has_value());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn prop_offset_does_not_change_identity(a in instant_strategy(), offset_hours in -12i32..=12) {
        let offset = chrono::FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let shifted = TemporalValue::from_timestamp(a.with_timezone(&offset));
        let plain = TemporalValue::from_timestamp(a);
        prop_assert!(shifted == plain);
        prop_assert_eq!(hash_of(&shifted), hash_of(&plain));
    }
}
