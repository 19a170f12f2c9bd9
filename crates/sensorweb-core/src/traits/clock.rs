//! Clock: injected source of the current instant.

use chrono::{DateTime, Utc};

/// Source of "now" for marker resolution.
///
/// Never read the wall clock directly in resolution code; take a `Clock` so
/// tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
