//! Clock source for the tracker.
//!
//! The tracker never calls `Local::now()` directly; it asks an injected
//! [`Clock`]. Production code uses [`SystemClock`], tests drive a
//! [`ManualClock`] forward by hand so durations are exact.
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use tasktime::libs::clock::{Clock, ManualClock};
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let clock = ManualClock::new(start);
//! clock.advance(Duration::seconds(5));
//! assert_eq!(clock.now(), start + Duration::seconds(5));
//! ```

use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;
use std::sync::Arc;

/// Supplies the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same current time, so a test can keep one handle and
/// give another to the tracker.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, at: NaiveDateTime) {
        *self.current.lock() = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
