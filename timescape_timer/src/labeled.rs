// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small indicator with a text label, used to mark live data.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::indicator::{IndicatorSpec, TimerColor};
use crate::timer::TimerOptions;

/// Width of the embedded indicator, in pixels.
pub const LABELED_INDICATOR_WIDTH: f64 = 8.0;

/// A labelled timer badge.
///
/// The badge takes its colour; the embedded indicator is always white, without outline, and
/// bounces while running.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledTimerSpec {
    /// Label text.
    pub label: String,
    /// Badge colour.
    pub color: TimerColor,
    /// Timer behaviour.
    #[serde(flatten)]
    pub timer: TimerOptions,
}

impl Default for LabeledTimerSpec {
    fn default() -> Self {
        Self {
            label: String::from("Live"),
            color: TimerColor::TimelineGreen,
            timer: TimerOptions::default(),
        }
    }
}

impl LabeledTimerSpec {
    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the badge colour.
    pub fn with_color(mut self, color: TimerColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the timer behaviour.
    pub fn with_timer(mut self, timer: TimerOptions) -> Self {
        self.timer = timer;
        self
    }

    /// The embedded indicator.
    pub fn indicator(&self) -> IndicatorSpec {
        IndicatorSpec::default()
            .with_width(LABELED_INDICATOR_WIDTH)
            .with_color(TimerColor::White)
            .with_outline(false)
            .with_transition(true)
    }

    /// Class list of the badge.
    pub fn class_name(&self) -> String {
        format!("labeled-timer padding-horizontal-s {}", self.color.class_name())
    }

    /// Class list of the label text.
    pub fn label_class(&self) -> &'static str {
        "timer-label margin-left-xs white font-weight-bold"
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults() {
        let spec = LabeledTimerSpec::default();
        assert_eq!(spec.label, "Live", "label");
        assert_eq!(spec.timer, TimerOptions::default(), "timer defaults");
        assert_eq!(spec.class_name(), "labeled-timer padding-horizontal-s timeline-green", "badge");
    }

    #[test]
    fn indicator_is_small_white_and_bouncing() {
        let indicator = LabeledTimerSpec::default()
            .with_color(TimerColor::Red)
            .indicator();
        assert_eq!(indicator.width, 8.0, "width");
        assert_eq!(indicator.color, TimerColor::White, "always white");
        assert!(!indicator.outline, "no outline");
        assert!(indicator.transition, "bounces");
        assert!(indicator.background, "keeps background");
    }

    #[test]
    fn timer_fields_are_flattened() {
        let spec: LabeledTimerSpec =
            serde_json::from_str(r#"{"label": "Now", "duration": 5000, "loop": true}"#).unwrap();
        assert_eq!(spec.label, "Now", "label");
        assert_eq!(spec.timer.duration_ms, 5000, "duration");
        assert!(spec.timer.looping, "loop");
        assert_eq!(spec.color, TimerColor::TimelineGreen, "default colour");
    }
}
