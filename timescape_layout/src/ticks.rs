// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day ticks and the even-spacing rule for labelled ("major") ticks.

extern crate alloc;

use alloc::vec::Vec;

use crate::scale::AxisScale;
use crate::window::{TimeWindow, Timestamp};

/// One tick per visible day.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DayTick {
    /// Zero-based index of the day in the window.
    pub index: usize,
    /// Day-start timestamp.
    pub day: Timestamp,
    /// Scaled x coordinate, in percent.
    pub x: f64,
    /// Whether this tick also carries a label.
    pub major: bool,
}

/// All day ticks of a window, with majors selected by even spacing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TickLayout {
    spacing: usize,
    ticks: Vec<DayTick>,
}

impl TickLayout {
    /// Lays out one tick per day and marks every `ceil(days / label_count)`-th day as major.
    ///
    /// This yields at most `label_count` majors, always starting at the first day. A
    /// `label_count` of 0 marks no majors.
    pub fn new(window: &TimeWindow, scale: &AxisScale, label_count: usize) -> Self {
        let day_count = window.days().len();
        let spacing = label_spacing(day_count, label_count);
        let ticks = window
            .days()
            .enumerate()
            .map(|(index, day)| DayTick {
                index,
                day,
                x: scale.map_timestamp(day),
                major: spacing != 0 && index % spacing == 0,
            })
            .collect();
        Self { spacing, ticks }
    }

    /// Index distance between consecutive majors (0 when there are none).
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Every tick, in day order.
    pub fn ticks(&self) -> &[DayTick] {
        &self.ticks
    }

    /// The labelled ticks, in day order.
    pub fn majors(&self) -> impl Iterator<Item = &DayTick> {
        self.ticks.iter().filter(|t| t.major)
    }
}

fn label_spacing(day_count: usize, label_count: usize) -> usize {
    if label_count == 0 || day_count == 0 {
        return 0;
    }
    day_count.div_ceil(label_count)
}
