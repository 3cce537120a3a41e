// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activity data supplied by the store layer.
//!
//! These types mirror the activity summary payload: a list of entries whose order is the row
//! order, each with one or more active date intervals.

extern crate alloc;

use alloc::string::String;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::window::Timestamp;

/// One active date interval. A missing end means the activity is ongoing.
///
/// Serialized as a two-element array `[start, end]` of nullable RFC 3339 timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(Option<DateTime<Utc>>, Option<DateTime<Utc>>)",
    into = "(Option<DateTime<Utc>>, Option<DateTime<Utc>>)"
)]
pub struct ActivityInterval {
    /// When the activity became active.
    pub start: Option<DateTime<Utc>>,
    /// When the activity stopped being active; `None` while ongoing.
    pub end: Option<DateTime<Utc>>,
}

impl ActivityInterval {
    /// Creates an interval from optional endpoints.
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Creates an interval from optional millisecond timestamps.
    ///
    /// Timestamps outside chrono's range are treated as missing.
    pub fn from_millis(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self {
            start: start.and_then(DateTime::from_timestamp_millis),
            end: end.and_then(DateTime::from_timestamp_millis),
        }
    }

    /// Start as a millisecond timestamp.
    pub fn start_millis(&self) -> Option<Timestamp> {
        self.start.map(|d| d.timestamp_millis())
    }

    /// End as a millisecond timestamp.
    pub fn end_millis(&self) -> Option<Timestamp> {
        self.end.map(|d| d.timestamp_millis())
    }

    /// Returns `true` if the interval has no end.
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

impl From<(Option<DateTime<Utc>>, Option<DateTime<Utc>>)> for ActivityInterval {
    fn from((start, end): (Option<DateTime<Utc>>, Option<DateTime<Utc>>)) -> Self {
        Self { start, end }
    }
}

impl From<ActivityInterval> for (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    fn from(value: ActivityInterval) -> Self {
        (value.start, value.end)
    }
}

/// Intervals of one entry; almost always one or two.
pub type ActivityRanges = SmallVec<[ActivityInterval; 2]>;

/// One row of the timeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummaryEntry {
    /// Store identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Priority rank shown next to the name.
    #[serde(default)]
    pub priority: Option<i64>,
    /// Status keyword, also used as a row class.
    #[serde(default)]
    pub status: String,
    /// Archived entries show no priority.
    #[serde(default)]
    pub is_archived: bool,
    /// Active intervals; may be empty.
    #[serde(default)]
    pub active_ranges: ActivityRanges,
}

/// Aggregate counts shown alongside the timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityCounts {
    /// Entries active now.
    pub active: u64,
    /// Active entries that are tests.
    pub active_test: u64,
    /// Active entries that are not tests.
    pub active_nontest: u64,
    /// Entries scheduled within the lookahead.
    pub scheduled: u64,
    /// Test entries.
    pub test: u64,
    /// Entries active at any point in the lookback.
    pub total: u64,
}
