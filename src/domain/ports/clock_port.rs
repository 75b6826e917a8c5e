//! Clock port definition.

use chrono::{DateTime, Utc};

/// Source of the current time, used for cache expiry and freshness stamps.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::TimeDelta;
    use std::sync::Mutex;

    /// Manually advanced clock for testing.
    pub struct FakeClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl FakeClock {
        /// Creates a clock frozen at `start`.
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        /// Creates a clock frozen at a fixed date.
        pub fn fixed() -> Self {
            Self::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap())
        }

        /// Moves the clock forward.
        pub fn advance(&self, by: TimeDelta) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }
}
