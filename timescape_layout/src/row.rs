// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-entry row geometry: vertical bounds and one plot-line per active interval.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use serde::Serialize;
use smallvec::SmallVec;

use crate::activity::{ActivityInterval, ActivitySummaryEntry};
use crate::scale::{AxisScale, FULL_WIDTH};
use crate::window::Timestamp;

/// x coordinate used for an interval end that has not happened yet.
pub const ONGOING_X: f64 = FULL_WIDTH;

/// x coordinate of the chart's visible left edge.
pub const LEFT_EDGE_X: f64 = 0.0;

/// Row divider lines are drawn half a pixel above the row bottom to line up with table borders.
const DIVIDER_INSET: f64 = 0.5;

/// Vertical extent of a row, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RowBounds {
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Vertical centre, where plot-lines are drawn.
    pub y_middle: f64,
}

impl RowBounds {
    /// Bounds of the row at `index` when every row is `row_height` tall.
    pub fn new(index: usize, row_height: f64) -> Self {
        let top = index as f64 * row_height;
        Self {
            top,
            bottom: top + row_height,
            y_middle: top + row_height / 2.0,
        }
    }

    /// Row height.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// y coordinate of the divider line under the row.
    pub fn divider_y(&self) -> f64 {
        self.bottom - DIVIDER_INSET
    }
}

/// A circular cap at one end of a plot-line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EndCap {
    /// Centre x, in percent.
    pub cx: f64,
    /// Centre y, in pixels.
    pub cy: f64,
    /// Radius, in pixels.
    pub r: f64,
}

/// Returns a cap for the point, unless it sits on (or beyond) a chart edge.
pub fn cap_for_point(x: f64, y: f64, radius: f64) -> Option<EndCap> {
    (x > LEFT_EDGE_X && x < FULL_WIDTH).then_some(EndCap {
        cx: x,
        cy: y,
        r: radius,
    })
}

/// Geometry for one active interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlotLineGeometry {
    /// Clamped, scaled start, in percent.
    pub x_start: f64,
    /// Clamped, scaled end, in percent; [`ONGOING_X`] for ongoing intervals.
    pub x_end: f64,
    /// Row centre, in pixels.
    pub y_middle: f64,
    /// The unscaled dates, kept for the tooltip.
    pub dates: ActivityInterval,
}

impl PlotLineGeometry {
    /// Scales and clamps an interval onto the row's centre line.
    pub fn new(dates: ActivityInterval, y_middle: f64, scale: &AxisScale) -> Self {
        Self {
            x_start: scale_point(scale, dates.start_millis(), LEFT_EDGE_X),
            x_end: scale_point(scale, dates.end_millis(), ONGOING_X),
            y_middle,
            dates,
        }
    }

    /// Horizontal centre of the line.
    pub fn x_middle(&self) -> f64 {
        (self.x_start + self.x_end) / 2.0
    }

    /// Whether the line has any visible length.
    pub fn is_visible(&self) -> bool {
        self.x_end > self.x_start
    }

    /// Caps for the start and end points, where they apply.
    pub fn caps(&self, radius: f64) -> [Option<EndCap>; 2] {
        [
            cap_for_point(self.x_start, self.y_middle, radius),
            cap_for_point(self.x_end, self.y_middle, radius),
        ]
    }
}

/// Scales an optional timestamp, substituting `missing` and clamping into `[0, 100]`.
fn scale_point(scale: &AxisScale, t: Option<Timestamp>, missing: f64) -> f64 {
    let x = t.map_or(missing, |t| scale.map_timestamp(t));
    if x.is_nan() {
        return missing;
    }
    x.clamp(LEFT_EDGE_X, FULL_WIDTH)
}

/// Layout of a single timeline row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowLayout {
    /// Row index (0 = top).
    pub index: usize,
    /// Entry name, for the tooltip.
    pub name: String,
    /// Row class, including the status keyword when there is one.
    pub class_name: String,
    /// Vertical bounds.
    pub bounds: RowBounds,
    /// One geometry per interval, in input order.
    pub plot_lines: SmallVec<[PlotLineGeometry; 2]>,
}

impl RowLayout {
    /// Lays out `entry` as row `index`.
    ///
    /// Overlapping intervals are kept as separate lines. An entry without intervals yields a row
    /// with no plot-lines.
    pub fn new(
        entry: &ActivitySummaryEntry,
        index: usize,
        row_height: f64,
        scale: &AxisScale,
    ) -> Self {
        let bounds = RowBounds::new(index, row_height);
        let plot_lines = entry
            .active_ranges
            .iter()
            .map(|dates| PlotLineGeometry::new(*dates, bounds.y_middle, scale))
            .collect();
        let class_name = if entry.status.is_empty() {
            String::from("timeline-row")
        } else {
            format!("timeline-row {}", entry.status)
        };
        Self {
            index,
            name: entry.name.clone(),
            class_name,
            bounds,
            plot_lines,
        }
    }

    /// End caps of every plot-line in the row.
    pub fn end_caps(&self, radius: f64) -> impl Iterator<Item = EndCap> + '_ {
        self.plot_lines
            .iter()
            .flat_map(move |line| line.caps(radius))
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::window::{DAY_MS, TimeWindow};

    fn setup() -> (TimeWindow, AxisScale) {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 10, 9, 0, 0)
            .unwrap();
        let w = TimeWindow::new(now, 10, 10).unwrap();
        let s = AxisScale::new(&w, 5.0).unwrap();
        (w, s)
    }

    fn entry(ranges: &[ActivityInterval]) -> ActivitySummaryEntry {
        ActivitySummaryEntry {
            id: 1,
            name: String::from("Checkout test"),
            status: String::from("active"),
            active_ranges: ranges.iter().copied().collect(),
            ..ActivitySummaryEntry::default()
        }
    }

    #[test]
    fn bounds_stack_by_index() {
        let b = RowBounds::new(3, 44.0);
        assert_eq!(b.top, 132.0, "top");
        assert_eq!(b.bottom, 176.0, "bottom");
        assert_eq!(b.y_middle, 154.0, "middle");
        assert_eq!(b.divider_y(), 175.5, "divider");
    }

    #[test]
    fn fully_open_interval_spans_the_chart() {
        let (_, s) = setup();
        let row = RowLayout::new(&entry(&[ActivityInterval::default()]), 0, 44.0, &s);
        let line = row.plot_lines[0];
        assert_eq!(line.x_start, LEFT_EDGE_X, "missing start clamps to the left edge");
        assert_eq!(line.x_end, ONGOING_X, "missing end is the ongoing sentinel");
    }

    #[test]
    fn interval_before_window_clamps_to_zero() {
        let (w, s) = setup();
        let before = ActivityInterval::from_millis(
            Some(w.min() - 30 * DAY_MS),
            Some(w.min() - 20 * DAY_MS),
        );
        let line = PlotLineGeometry::new(before, 22.0, &s);
        assert_eq!(line.x_start, 0.0, "start clamped, not negative");
        assert_eq!(line.x_end, 0.0, "end clamped, not negative");
        assert!(!line.is_visible(), "nothing to draw");
    }

    #[test]
    fn interval_after_window_clamps_to_the_right_edge() {
        let (w, s) = setup();
        let after = ActivityInterval::from_millis(Some(w.max() + 5 * DAY_MS), None);
        let line = PlotLineGeometry::new(after, 22.0, &s);
        assert_eq!(line.x_start, 100.0, "start clamped to the right edge");
        assert!(!line.is_visible(), "nothing to draw");
    }

    #[test]
    fn overlapping_intervals_are_not_merged() {
        let (w, s) = setup();
        let a = ActivityInterval::from_millis(Some(w.min() + DAY_MS), Some(w.min() + 5 * DAY_MS));
        let b = ActivityInterval::from_millis(Some(w.min() + 2 * DAY_MS), None);
        let row = RowLayout::new(&entry(&[a, b]), 1, 44.0, &s);
        assert_eq!(row.plot_lines.len(), 2, "one line per interval");
        assert_eq!(row.plot_lines[1].dates, b, "real dates preserved");
        assert_eq!(row.class_name, "timeline-row active", "status class");
    }

    #[test]
    fn empty_entry_has_no_lines() {
        let (_, s) = setup();
        let mut e = entry(&[]);
        e.status.clear();
        let row = RowLayout::new(&e, 0, 44.0, &s);
        assert!(row.plot_lines.is_empty(), "no plot-lines");
        assert_eq!(row.class_name, "timeline-row", "plain class");
    }

    #[test]
    fn caps_are_suppressed_at_edges() {
        let (w, s) = setup();
        let inner = ActivityInterval::from_millis(Some(w.min() + DAY_MS), None);
        let row = RowLayout::new(&entry(&[inner]), 0, 44.0, &s);
        let caps: Vec<_> = row.end_caps(5.0).collect();
        assert_eq!(caps.len(), 1, "only the start cap; the ongoing end sits on the edge");
        assert_eq!(caps[0].cy, 22.0, "cap on the centre line");
        assert!(cap_for_point(0.0, 0.0, 5.0).is_none(), "left edge");
        assert!(cap_for_point(100.0, 0.0, 5.0).is_none(), "right edge");
        assert!(cap_for_point(0.01, 0.0, 5.0).is_some(), "just inside");
    }
}
