//! Resolution policies and clocks.

pub mod clock;
pub mod policy;

pub use clock::{FixedClock, SystemClock};
pub use policy::{DatasetBounds, NoResolution, StandardResolutionPolicy};
