//! Structural equality and hashing for [`TemporalValue`].

use std::hash::{Hash, Hasher};

use super::TemporalValue;

/// First matching rule decides:
/// 1. both concrete: same instant
/// 2. both carry a primary marker: same marker
/// 3. both carry an extended marker: same marker
/// 4. otherwise unequal, including two empty values
///
/// Rule 4 makes equality irreflexive for empty values, so `Eq` is not implemented.
/// Requested precision and metadata never participate.
impl PartialEq for TemporalValue {
    fn eq(&self, other: &Self) -> bool {
        match (
            (self.value, other.value),
            (self.indeterminate, other.indeterminate),
            (self.extended, other.extended),
        ) {
            ((Some(a), Some(b)), _, _) => a == b,
            (_, (Some(a), Some(b)), _) => a == b,
            (_, _, (Some(a), Some(b))) => a == b,
            _ => false,
        }
    }
}

/// Concrete instant when present, a fixed tag otherwise. Marker-only values
/// all collide and are told apart by `eq`.
///
/// # Hash
/// A timestamp-plus-marker value can equal a marker-only value (`t+latest ==
/// latest`) yet hash differently; do not mix the two shapes as map keys.
impl Hash for TemporalValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.value {
            Some(value) => {
                1u8.hash(state);
                value.timestamp().hash(state);
                value.timestamp_subsec_nanos().hash(state);
            }
            None => 0u8.hash(state),
        }
    }
}
