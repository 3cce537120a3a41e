// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample activity data, positioned relative to "now".

use timescape_layout::{ActivityCounts, ActivityInterval, ActivitySummaryEntry, DAY_MS, Timestamp};

/// `(name, status, [(start_day, end_day)])`, days relative to now; `None` is open-ended.
type Row = (&'static str, &'static str, &'static [(Option<i64>, Option<i64>)]);

const ROWS: &[Row] = &[
    ("Homepage hero banner", "running", &[(Some(-12), None)]),
    ("Checkout button copy", "test", &[(Some(-40), Some(-25)), (Some(-6), None)]),
    ("Holiday promotion", "scheduled", &[(Some(3), Some(10))]),
    ("Search ranking tweak", "complete", &[(Some(-28), Some(-14))]),
    ("Legacy onboarding", "archived", &[(None, Some(-20))]),
    ("Pricing page layout", "test", &[(Some(-2), Some(2)), (Some(-1), Some(4))]),
    ("Draft experience", "", &[]),
];

pub(crate) fn entries(now: Timestamp) -> Vec<ActivitySummaryEntry> {
    let at = |days: i64| now + days * DAY_MS;
    ROWS.iter()
        .zip(1_u64..)
        .map(|(&(name, status, ranges), id)| ActivitySummaryEntry {
            id,
            name: name.to_owned(),
            priority: (status != "archived").then_some(id as i64),
            status: status.to_owned(),
            is_archived: status == "archived",
            active_ranges: ranges
                .iter()
                .map(|(start, end)| ActivityInterval::from_millis(start.map(at), end.map(at)))
                .collect(),
        })
        .collect()
}

/// Aggregate counts for `entries` at `now`.
pub(crate) fn counts(entries: &[ActivitySummaryEntry], now: Timestamp) -> ActivityCounts {
    let is_active = |entry: &ActivitySummaryEntry| {
        entry.active_ranges.iter().any(|range| {
            range.start_millis().is_none_or(|start| start <= now)
                && range.end_millis().is_none_or(|end| end > now)
        })
    };
    let is_scheduled = |entry: &ActivitySummaryEntry| {
        entry
            .active_ranges
            .iter()
            .any(|range| range.start_millis().is_some_and(|start| start > now))
    };
    let is_test = |entry: &ActivitySummaryEntry| entry.status == "test";

    let mut counts = ActivityCounts::default();
    for entry in entries {
        let active = is_active(entry);
        counts.active += u64::from(active);
        counts.active_test += u64::from(active && is_test(entry));
        counts.active_nontest += u64::from(active && !is_test(entry));
        counts.scheduled += u64::from(is_scheduled(entry));
        counts.test += u64::from(is_test(entry));
        counts.total += u64::from(!entry.active_ranges.is_empty());
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_ranges() {
        let now = 1_700_000_000_000;
        let entries = entries(now);
        let counts = counts(&entries, now);
        assert_eq!(counts.active, 3, "banner, checkout, pricing");
        assert_eq!(counts.active_test, 2, "checkout and pricing are tests");
        assert_eq!(counts.scheduled, 1, "holiday promotion");
        assert_eq!(counts.test, 2, "two test entries");
        assert_eq!(counts.total, 6, "draft has no ranges");
    }
}
