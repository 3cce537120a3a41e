// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear mapping from timestamps to padded percentage coordinates.
//!
//! The header and the chart body share one [`AxisScale`] per layout pass so that ticks, labels,
//! gridlines and plot-lines always agree on where a given instant sits.

use crate::error::{Result, TimelineError};
use crate::window::{TimeWindow, Timestamp};

/// Total width of the chart coordinate space, in percent.
pub const FULL_WIDTH: f64 = 100.0;

/// A linear scale from `[min, max]` onto `[padding, 100 - padding]`.
///
/// Values outside the domain extrapolate outside the padded range; callers that render must
/// clamp (see [`crate::RowLayout`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    domain: (f64, f64),
    padding: f64,
}

impl AxisScale {
    /// Creates the scale for a window with `padding` percent reserved on each side.
    pub fn new(window: &TimeWindow, padding: f64) -> Result<Self> {
        Self::from_domain(window.min() as f64, window.max() as f64, padding)
    }

    /// Creates a scale over an arbitrary numeric domain.
    ///
    /// A domain with `max <= min` is an [`TimelineError::EmptyWindow`] rather than a scale that
    /// would divide by zero.
    pub fn from_domain(min: f64, max: f64, padding: f64) -> Result<Self> {
        if !padding.is_finite() || !(0.0..FULL_WIDTH / 2.0).contains(&padding) {
            return Err(TimelineError::InvalidPadding(padding));
        }
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(TimelineError::EmptyWindow);
        }
        tracing::debug!(min, max, padding, "created axis scale");
        Ok(Self {
            domain: (min, max),
            padding,
        })
    }

    /// Padding reserved at each edge, in percent.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// The padded output range `(padding, 100 - padding)`.
    pub fn range(&self) -> (f64, f64) {
        (self.padding, FULL_WIDTH - self.padding)
    }

    /// The numeric domain `(min, max)`.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Maps a domain value to a percentage coordinate.
    ///
    /// Equivalent to `(value - min) * (100 - 2 * padding) / (max - min) + padding`, arranged so
    /// that `min` and `max` land exactly on the range ends.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range();
        let t = (value - d0) / (d1 - d0);
        (1.0 - t) * r0 + t * r1
    }

    /// Maps a millisecond timestamp to a percentage coordinate.
    pub fn map_timestamp(&self, t: Timestamp) -> f64 {
        self.map(t as f64)
    }

    /// Maps a percentage coordinate back into the domain.
    pub fn invert(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range();
        let t = (x - r0) / (r1 - r0);
        (1.0 - t) * d0 + t * d1
    }
}
