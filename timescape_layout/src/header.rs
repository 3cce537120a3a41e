// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header geometry: day ticks, date labels and the "now" flag.
//!
//! The header is a strip `header_height` pixels tall sharing the body's horizontal scale. Ticks
//! hang from its bottom edge; major ticks are taller and carry a label.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::format::format_date;
use crate::options::{TextAnchor, TimelineOptions};
use crate::scale::{AxisScale, FULL_WIDTH};
use crate::ticks::TickLayout;
use crate::window::{TimeWindow, Timestamp};

/// Labels sit just below the vertical centre of the header.
const LABEL_BASELINE_OFFSET: f64 = 2.0;

/// A vertical tick line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeaderTick {
    /// Day-start timestamp.
    pub day: Timestamp,
    /// x coordinate, in percent.
    pub x: f64,
    /// Top of the line, in pixels.
    pub y1: f64,
    /// Bottom of the line, in pixels.
    pub y2: f64,
    /// Whether this is a labelled tick.
    pub major: bool,
}

/// A date label above a major tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderLabel {
    /// Day-start timestamp.
    pub day: Timestamp,
    /// x coordinate, in percent.
    pub x: f64,
    /// Baseline, in pixels.
    pub y: f64,
    /// Formatted date.
    pub text: String,
    /// Anchoring relative to `x`.
    pub anchor: TextAnchor,
}

/// Position of the flag marking the current time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NowFlag {
    /// Distance from the right edge, in percent.
    pub right: f64,
}

/// Everything drawn in the header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderLayout {
    /// Header height, in pixels.
    pub height: f64,
    /// One tick per day.
    pub ticks: Vec<HeaderTick>,
    /// One label per major tick.
    pub labels: Vec<HeaderLabel>,
    /// Flag at the current time.
    pub now: NowFlag,
}

impl HeaderLayout {
    /// Lays out the header for `window` with the shared `scale`.
    pub fn new(
        window: &TimeWindow,
        scale: &AxisScale,
        options: &TimelineOptions,
        now: Timestamp,
    ) -> Self {
        let tick_layout = TickLayout::new(window, scale, options.label_count);
        let y2 = options.header_height;
        let ticks = tick_layout
            .ticks()
            .iter()
            .map(|t| HeaderTick {
                day: t.day,
                x: t.x,
                y1: y2 - if t.major {
                    options.tick_major_height
                } else {
                    options.tick_height
                },
                y2,
                major: t.major,
            })
            .collect();
        let label_y = options.header_height / 2.0 + LABEL_BASELINE_OFFSET;
        let labels = tick_layout
            .majors()
            .map(|t| HeaderLabel {
                day: t.day,
                x: t.x,
                y: label_y,
                text: window
                    .local_time(t.day)
                    .map(|d| format_date(&d, &options.label_format))
                    .unwrap_or_default(),
                anchor: options.label_text_anchor,
            })
            .collect();
        Self {
            height: options.header_height,
            ticks,
            labels,
            now: NowFlag {
                right: FULL_WIDTH - scale.map_timestamp(now),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use chrono::{FixedOffset, TimeZone};

    use super::*;

    fn fixture() -> (TimeWindow, AxisScale, TimelineOptions, Timestamp) {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 31, 12, 0, 0)
            .unwrap();
        let options = TimelineOptions::default();
        let window = options.window(now).unwrap();
        let scale = options.scale(&window).unwrap();
        (window, scale, options, now.timestamp_millis())
    }

    #[test]
    fn tick_heights_follow_major_flag() {
        let (window, scale, options, now) = fixture();
        let header = HeaderLayout::new(&window, &scale, &options, now);
        assert_eq!(header.ticks.len(), 37, "one tick per day");
        let first = header.ticks[0];
        assert!(first.major, "first day is major");
        assert_eq!((first.y1, first.y2), (26.0, 34.0), "major tick is 8px");
        let second = header.ticks[1];
        assert!(!second.major, "second day is minor");
        assert_eq!(second.y1, 29.0, "minor tick is 5px");
    }

    #[test]
    fn labels_are_formatted_and_bounded() {
        let (window, scale, options, now) = fixture();
        let header = HeaderLayout::new(&window, &scale, &options, now);
        assert!(header.labels.len() <= options.label_count, "at most label_count");
        let texts: Vec<&str> = header.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts[0], "Mar 1", "first label is the first day");
        assert_eq!(texts[1], "Mar 7", "spacing of ceil(37 / 7) = 6 days");
        assert!(header.labels.iter().all(|l| l.y == 19.0), "baseline at 34/2 + 2");
    }

    #[test]
    fn now_flag_measures_from_the_right() {
        let (window, scale, options, now) = fixture();
        let header = HeaderLayout::new(&window, &scale, &options, now);
        let x = scale.map_timestamp(now);
        assert!((header.now.right - (100.0 - x)).abs() < 1e-9, "right = 100 - x");
    }
}
