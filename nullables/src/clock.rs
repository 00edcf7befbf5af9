//! Nullable clock: deterministic time for governor calls.

use ballot_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to. Governor operations take `now`
/// explicitly, so tests pass `clock.now()` into each call.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by `secs`, saturating at the end of time.
    pub fn advance(&self, secs: u64) -> Timestamp {
        self.current.set(self.current.get().saturating_add(secs));
        self.now()
    }

    /// Jump to `at`. Moving backwards is allowed.
    pub fn set(&self, at: Timestamp) {
        self.current.set(at.as_secs());
    }

    /// Jump to exactly `deadline`, the first instant at which it has passed.
    pub fn reach(&self, deadline: Timestamp) -> Timestamp {
        self.set(deadline);
        self.now()
    }
}

impl Default for NullClock {
    fn default() -> Self {
        Self::new(1_700_000_000)
    }
}
