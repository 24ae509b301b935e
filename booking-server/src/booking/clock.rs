//! Wall-clock abstraction.

use chrono::{Local, NaiveDateTime};

/// Source of "now" for rules that compare against wall-clock time
/// (birth dates, departure times).
///
/// This abstraction lets the services be tested with a pinned clock.
pub trait Clock: Send + Sync {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The process-local system clock. Times are zoneless local wall-clock
/// values, matching how departures are entered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a known instant, for tests.
#[cfg(test)]
pub(crate) struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
