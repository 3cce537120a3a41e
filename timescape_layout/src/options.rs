// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart options and their validation.

extern crate alloc;

use alloc::string::String;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::format::is_valid_date_format;
use crate::scale::AxisScale;
use crate::window::TimeWindow;

/// Width of the body's scroll container border, subtracted when aligning the header.
pub const SCROLLBAR_BORDER_PX: f64 = 1.0;

/// Horizontal anchoring of header labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Label starts at its tick.
    #[serde(alias = "left")]
    Start,
    /// Label is centred on its tick.
    #[default]
    Middle,
    /// Label ends at its tick.
    #[serde(alias = "right")]
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Every tunable of the timeline chart.
///
/// Missing fields take their defaults when deserialized, so a config file may supply any subset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineOptions {
    /// Days shown before today.
    pub time_lookback: i64,
    /// Days shown after today.
    pub time_lookahead: i64,
    /// Radius of the end-cap circles, in pixels.
    pub end_cap_radius: f64,
    /// Header height, in pixels.
    pub header_height: f64,
    /// Horizontal padding of the axis range, in percent.
    pub horizontal_padding: f64,
    /// Upper bound on the number of header labels.
    pub label_count: usize,
    /// strftime format of header labels.
    pub label_format: String,
    /// Anchoring of header labels.
    pub label_text_anchor: TextAnchor,
    /// Row height, in pixels.
    pub row_height: f64,
    /// Whether plot-lines get end caps.
    pub show_end_caps: bool,
    /// Height of minor ticks, in pixels.
    pub tick_height: f64,
    /// Height of major ticks, in pixels.
    pub tick_major_height: f64,
    /// strftime format of tooltip dates.
    pub tooltip_date_format: String,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            time_lookback: 30,
            time_lookahead: 7,
            end_cap_radius: 5.0,
            header_height: 34.0,
            horizontal_padding: 5.0,
            label_count: 7,
            label_format: String::from("%b %-d"),
            label_text_anchor: TextAnchor::Middle,
            row_height: 44.0,
            show_end_caps: false,
            tick_height: 5.0,
            tick_major_height: 8.0,
            tooltip_date_format: String::from("%b %-d, %Y"),
        }
    }
}

impl TimelineOptions {
    /// Sets the lookback and lookahead day counts.
    pub fn with_days(mut self, lookback: i64, lookahead: i64) -> Self {
        self.time_lookback = lookback;
        self.time_lookahead = lookahead;
        self
    }

    /// Sets the horizontal padding.
    pub fn with_horizontal_padding(mut self, padding: f64) -> Self {
        self.horizontal_padding = padding;
        self
    }

    /// Sets the label count.
    pub fn with_label_count(mut self, count: usize) -> Self {
        self.label_count = count;
        self
    }

    /// Sets the row height.
    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Enables or disables end caps.
    pub fn with_end_caps(mut self, show: bool) -> Self {
        self.show_end_caps = show;
        self
    }

    /// Checks every option, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.time_lookback < 0 {
            return Err(TimelineError::NegativeLookback(self.time_lookback));
        }
        if self.time_lookahead < 0 {
            return Err(TimelineError::NegativeLookahead(self.time_lookahead));
        }
        if self.time_lookback.saturating_add(self.time_lookahead) == 0 {
            return Err(TimelineError::EmptyWindow);
        }
        if !(0.0..50.0).contains(&self.horizontal_padding) {
            return Err(TimelineError::InvalidPadding(self.horizontal_padding));
        }
        if self.label_count == 0 {
            return Err(TimelineError::ZeroLabelCount);
        }
        for (name, value) in [
            ("end_cap_radius", self.end_cap_radius),
            ("header_height", self.header_height),
            ("row_height", self.row_height),
            ("tick_height", self.tick_height),
            ("tick_major_height", self.tick_major_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidDimension { name, value });
            }
        }
        for (name, format) in [
            ("label_format", &self.label_format),
            ("tooltip_date_format", &self.tooltip_date_format),
        ] {
            if !is_valid_date_format(format) {
                return Err(TimelineError::InvalidDateFormat {
                    name,
                    format: format.clone(),
                });
            }
        }
        Ok(())
    }

    /// The time window around `now`.
    pub fn window(&self, now: DateTime<FixedOffset>) -> Result<TimeWindow> {
        TimeWindow::new(now, self.time_lookback, self.time_lookahead)
    }

    /// The axis scale for `window`.
    pub fn scale(&self, window: &TimeWindow) -> Result<AxisScale> {
        AxisScale::new(window, self.horizontal_padding)
    }
}

/// Right padding that keeps the header's ticks aligned with a body narrowed by a scrollbar.
pub fn header_padding_right(header_width: f64, body_width: f64) -> f64 {
    header_width - body_width - SCROLLBAR_BORDER_PX
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_validate() {
        let options = TimelineOptions::default();
        assert_eq!(options.validate(), Ok(()), "defaults are valid");
        assert_eq!(options.label_count, 7, "seven labels");
        assert_eq!(options.row_height, 44.0, "row height");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let options: TimelineOptions =
            serde_json::from_str(r#"{"time_lookback": 14, "label_text_anchor": "left"}"#).unwrap();
        assert_eq!(options.time_lookback, 14, "supplied");
        assert_eq!(options.time_lookahead, 7, "defaulted");
        assert_eq!(options.label_text_anchor, TextAnchor::Start, "alias accepted");
    }

    #[test]
    fn validation_errors() {
        let base = TimelineOptions::default();
        assert_eq!(
            base.clone().with_days(-1, 7).validate(),
            Err(TimelineError::NegativeLookback(-1)),
            "negative lookback"
        );
        assert_eq!(
            base.clone().with_days(0, 0).validate(),
            Err(TimelineError::EmptyWindow),
            "empty window"
        );
        assert_eq!(
            base.clone().with_horizontal_padding(50.0).validate(),
            Err(TimelineError::InvalidPadding(50.0)),
            "padding too large"
        );
        assert_eq!(
            base.clone().with_label_count(0).validate(),
            Err(TimelineError::ZeroLabelCount),
            "zero labels"
        );
        assert!(
            matches!(
                base.clone().with_row_height(f64::NAN).validate(),
                Err(TimelineError::InvalidDimension {
                    name: "row_height",
                    ..
                })
            ),
            "nan row height"
        );
        let bad_format = TimelineOptions {
            label_format: String::from("%Q"),
            ..base
        };
        assert!(
            matches!(
                bad_format.validate(),
                Err(TimelineError::InvalidDateFormat {
                    name: "label_format",
                    ..
                })
            ),
            "unknown specifier"
        );
    }

    #[test]
    fn header_compensation() {
        assert_eq!(header_padding_right(1000.0, 985.0), 14.0, "15px scrollbar less border");
    }
}
