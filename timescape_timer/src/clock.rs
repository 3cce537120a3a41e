// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic time sources for the timer.

use core::cell::Cell;
use core::time::Duration;

/// A monotonic clock, measured from an arbitrary origin.
pub trait MonotonicClock {
    /// Time since the clock's origin.
    fn now(&self) -> Duration;
}

/// A clock that only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Creates a clock reading `now`.
    pub fn new(now: Duration) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Moves the clock to `now`, which must not be earlier than the current reading.
    pub fn set(&self, now: Duration) {
        debug_assert!(now >= self.now.get(), "monotonic clocks never go backwards");
        self.now.set(now);
    }
}

impl MonotonicClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// The platform's monotonic clock, `performance.now()` on the web.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: web_time::Instant,
}

#[cfg(feature = "std")]
impl InstantClock {
    /// Creates a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: web_time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for InstantClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
