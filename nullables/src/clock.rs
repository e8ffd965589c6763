//! Nullable clock: deterministic time for testing.

use std::cell::Cell;
use tally_types::Timestamp;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_millis: u64) -> Self {
        Self {
            current: Cell::new(initial_millis),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of milliseconds.
    pub fn advance(&self, millis: u64) {
        self.current.set(self.current.get() + millis);
    }

    /// Return the current time, then advance by `millis`.
    pub fn tick(&self, millis: u64) -> Timestamp {
        let now = self.now();
        self.advance(millis);
        now
    }
}
