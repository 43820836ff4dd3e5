//! Wall-clock seam for archive naming.

use chrono::NaiveDateTime;

/// Source of the run timestamp embedded in the archive name.
///
/// Tests pin this to a fixed instant so archive names are predictable.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local system clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
