// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of a whole timeline chart.
//!
//! [`TimelineLayout::new`] validates the options, computes one window and one scale, and feeds
//! both to the header and to every row so that all geometry shares the same x mapping.

extern crate alloc;

use alloc::vec::Vec;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::activity::ActivitySummaryEntry;
use crate::error::Result;
use crate::header::HeaderLayout;
use crate::options::TimelineOptions;
use crate::row::{EndCap, RowLayout};
use crate::scale::AxisScale;
use crate::window::{TimeWindow, Timestamp};

/// Extra space below the last row, in pixels.
pub const BODY_BOTTOM_GUTTER: f64 = 33.0;

/// Inputs of one chart render.
#[derive(Clone, Copy, Debug)]
pub struct TimelineInput<'a> {
    /// The current wall-clock time; its offset decides day boundaries.
    pub now: DateTime<FixedOffset>,
    /// Rows, top to bottom.
    pub entries: &'a [ActivitySummaryEntry],
    /// Optional cutover time, marked with a vertical line when inside the window.
    pub session_marker: Option<Timestamp>,
}

impl<'a> TimelineInput<'a> {
    /// Input with no session marker.
    pub fn new(now: DateTime<FixedOffset>, entries: &'a [ActivitySummaryEntry]) -> Self {
        Self {
            now,
            entries,
            session_marker: None,
        }
    }

    /// Sets the session marker.
    pub fn with_session_marker(mut self, marker: Timestamp) -> Self {
        self.session_marker = Some(marker);
        self
    }
}

/// Shaded region covering the future part of the window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FutureOverlay {
    /// Left edge, in percent.
    pub x: f64,
    /// Width, in percent.
    pub width: f64,
}

/// Everything drawn in the scrolling body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyLayout {
    /// Total height, in pixels.
    pub height: f64,
    /// x of every weekly gridline, in percent.
    pub gridlines: Vec<f64>,
    /// x of the current time, in percent.
    pub today_x: f64,
    /// The future overlay.
    pub future: FutureOverlay,
    /// x of the session marker, when it falls inside the window.
    pub session_marker_x: Option<f64>,
    /// Rows, top to bottom.
    pub rows: Vec<RowLayout>,
    /// End caps, empty unless enabled.
    pub end_caps: Vec<EndCap>,
}

impl BodyLayout {
    /// Lays out the body rows and guides.
    pub fn new(
        window: &TimeWindow,
        scale: &AxisScale,
        options: &TimelineOptions,
        input: &TimelineInput<'_>,
    ) -> Self {
        let now = input.now.timestamp_millis();
        let rows: Vec<RowLayout> = input
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RowLayout::new(entry, index, options.row_height, scale))
            .collect();
        let end_caps = if options.show_end_caps {
            rows.iter()
                .flat_map(|row| row.end_caps(options.end_cap_radius))
                .collect()
        } else {
            Vec::new()
        };
        let today_x = scale.map_timestamp(now);
        Self {
            height: options.row_height * rows.len() as f64 + BODY_BOTTOM_GUTTER,
            gridlines: window.sundays().map(|t| scale.map_timestamp(t)).collect(),
            today_x,
            future: FutureOverlay {
                x: today_x,
                width: scale.map_timestamp(window.min() + (window.max() - now)),
            },
            session_marker_x: input
                .session_marker
                .filter(|t| window.contains(*t))
                .map(|t| scale.map_timestamp(t)),
            rows,
            end_caps,
        }
    }
}

/// A complete timeline: header and body sharing one window and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineLayout {
    /// Visible date range.
    pub window: TimeWindow,
    /// Shared horizontal scale.
    pub scale: AxisScale,
    /// Header geometry.
    pub header: HeaderLayout,
    /// Body geometry.
    pub body: BodyLayout,
}

impl TimelineLayout {
    /// Validates `options` and lays out the whole chart.
    pub fn new(options: &TimelineOptions, input: &TimelineInput<'_>) -> Result<Self> {
        options.validate()?;
        let window = options.window(input.now)?;
        let scale = options.scale(&window)?;
        let header = HeaderLayout::new(&window, &scale, options, input.now.timestamp_millis());
        let body = BodyLayout::new(&window, &scale, options, input);
        tracing::debug!(
            rows = body.rows.len(),
            days = window.total_days(),
            labels = header.labels.len(),
            "laid out timeline"
        );
        Ok(Self {
            window,
            scale,
            header,
            body,
        })
    }
}
