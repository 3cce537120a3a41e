// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible date range of a timeline.
//!
//! A [`TimeWindow`] is derived from "now" and a lookback/lookahead pair of day counts. Both ends
//! are snapped to day starts in the fixed UTC offset of "now", so the window always spans a
//! whole number of days of exactly [`DAY_MS`] milliseconds each.
//!
//! The window is a plain value: it is recomputed for every layout pass rather than mutated.

use core::iter::FusedIterator;

use chrono::{DateTime, Datelike, Days as CalendarDays, FixedOffset, NaiveDate, NaiveTime};

use crate::error::{Result, TimelineError};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Length of one day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// A source of the current wall-clock time.
pub trait WallClock {
    /// Returns the current time, carrying the UTC offset used for day boundaries.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// A clock frozen at a single instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl WallClock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// The system clock in the local time zone.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl WallClock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// The visible date range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    first_day: NaiveDate,
    offset: FixedOffset,
    total_days: u32,
    min: Timestamp,
}

impl TimeWindow {
    /// Computes the window spanning `lookback_days` before today through `lookahead_days` after.
    ///
    /// Today is the calendar date of `now` in its own offset.
    pub fn new(
        now: DateTime<FixedOffset>,
        lookback_days: i64,
        lookahead_days: i64,
    ) -> Result<Self> {
        if lookback_days < 0 {
            return Err(TimelineError::NegativeLookback(lookback_days));
        }
        if lookahead_days < 0 {
            return Err(TimelineError::NegativeLookahead(lookahead_days));
        }
        let total = lookback_days
            .checked_add(lookahead_days)
            .ok_or(TimelineError::WindowTooLarge)?;
        if total == 0 {
            return Err(TimelineError::EmptyWindow);
        }
        let total_days = u32::try_from(total).map_err(|_| TimelineError::WindowTooLarge)?;
        let lookback = u64::try_from(lookback_days).map_err(|_| TimelineError::WindowTooLarge)?;

        let offset = *now.offset();
        let first_day = now
            .date_naive()
            .checked_sub_days(CalendarDays::new(lookback))
            .ok_or(TimelineError::WindowTooLarge)?;
        first_day
            .checked_add_days(CalendarDays::new(u64::from(total_days)))
            .ok_or(TimelineError::WindowTooLarge)?;
        let min = first_day
            .and_time(NaiveTime::MIN)
            .and_local_timezone(offset)
            .single()
            .ok_or(TimelineError::WindowTooLarge)?
            .timestamp_millis();
        i64::from(total_days)
            .checked_mul(DAY_MS)
            .and_then(|span| min.checked_add(span))
            .ok_or(TimelineError::WindowTooLarge)?;

        tracing::debug!(
            %first_day,
            total_days,
            lookback_days,
            lookahead_days,
            "computed time window"
        );

        Ok(Self {
            first_day,
            offset,
            total_days,
            min,
        })
    }

    /// Computes the window around the clock's current time.
    pub fn from_clock(
        clock: &impl WallClock,
        lookback_days: i64,
        lookahead_days: i64,
    ) -> Result<Self> {
        Self::new(clock.now(), lookback_days, lookahead_days)
    }

    /// Start of the first visible day.
    pub fn min(&self) -> Timestamp {
        self.min
    }

    /// Start of the day after the last visible day.
    pub fn max(&self) -> Timestamp {
        self.min + i64::from(self.total_days) * DAY_MS
    }

    /// Number of whole days in the window.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Calendar date of the first visible day.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// UTC offset used for day boundaries and label formatting.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns `true` if `t` lies within `[min, max]`.
    pub fn contains(&self, t: Timestamp) -> bool {
        (self.min()..=self.max()).contains(&t)
    }

    /// Day-start timestamps from `min` up to, but excluding, `max`.
    ///
    /// Each call returns a fresh iterator, so the sequence can be walked any number of times.
    pub fn days(&self) -> Days {
        Days {
            min: self.min,
            next: 0,
            total: self.total_days,
        }
    }

    /// Day-start timestamps of every Sunday in the window.
    pub fn sundays(&self) -> impl Iterator<Item = Timestamp> + Clone + use<> {
        let first = self.first_day.weekday().num_days_from_sunday();
        self.days()
            .enumerate()
            .filter(move |(i, _)| (u64::from(first) + *i as u64).is_multiple_of(7))
            .map(|(_, day)| day)
    }

    /// Converts a timestamp into a date-time in the window's offset.
    pub fn local_time(&self, t: Timestamp) -> Option<DateTime<FixedOffset>> {
        DateTime::from_timestamp_millis(t).map(|utc| utc.with_timezone(&self.offset))
    }
}

/// Iterator over the day starts of a [`TimeWindow`].
#[derive(Clone, Debug)]
pub struct Days {
    min: Timestamp,
    next: u32,
    total: u32,
}

impl Iterator for Days {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        if self.next >= self.total {
            return None;
        }
        let day = self.min + i64::from(self.next) * DAY_MS;
        self.next += 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
