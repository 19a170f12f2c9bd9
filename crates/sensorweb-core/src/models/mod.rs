mod markers;

pub use markers::{ExtendedMarker, IndeterminateMarker, Marker};
