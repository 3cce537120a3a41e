// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular countdown indicator geometry.
//!
//! The indicator is drawn in a fixed `200 x 200` view box and scaled to [`IndicatorSpec::width`]
//! by the renderer. It has three layers, back to front: an optional background disc, the wedge
//! showing the time remaining, and an optional outline ring.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::Color;
use peniko::color::palette::css;
use serde::{Deserialize, Serialize};

/// Radius of the indicator in view-box units.
pub const CIRCLE_RADIUS: f64 = 100.0;

/// Stroke width of the background and outline circles, in view-box units.
pub const STROKE_WIDTH: f64 = 15.0;

/// Curve flattening tolerance for the wedge.
const TOLERANCE: f64 = 0.1;

/// Named indicator colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerColor {
    /// Black.
    Black,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// The timeline accent green.
    #[default]
    TimelineGreen,
    /// White.
    White,
}

impl TimerColor {
    /// Every colour, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::TimelineGreen,
        Self::White,
    ];

    /// Class name for the colour.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::TimelineGreen => "timeline-green",
            Self::White => "white",
        }
    }

    /// Paint colour.
    pub fn color(self) -> Color {
        match self {
            Self::Black => css::BLACK,
            Self::Blue => Color::from_rgb8(0x1f, 0x78, 0xc8),
            Self::Green => Color::from_rgb8(0x2c, 0xa0, 0x2c),
            Self::Red => Color::from_rgb8(0xd6, 0x27, 0x28),
            Self::TimelineGreen => Color::from_rgb8(0x3c, 0xb3, 0x71),
            Self::White => css::WHITE,
        }
    }
}

/// Appearance of a circular indicator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSpec {
    /// Rendered width and height, in pixels.
    pub width: f64,
    /// Colour of every layer.
    pub color: TimerColor,
    /// Whether to draw the background disc.
    pub background: bool,
    /// Whether to draw the outline ring.
    pub outline: bool,
    /// Whether the wedge and outline bounce while running.
    pub transition: bool,
}

impl Default for IndicatorSpec {
    fn default() -> Self {
        Self {
            width: 22.0,
            color: TimerColor::TimelineGreen,
            background: true,
            outline: true,
            transition: false,
        }
    }
}

impl IndicatorSpec {
    /// Sets the rendered width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the colour.
    pub fn with_color(mut self, color: TimerColor) -> Self {
        self.color = color;
        self
    }

    /// Enables or disables the background disc.
    pub fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    /// Enables or disables the outline ring.
    pub fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    /// Enables or disables the bounce transition.
    pub fn with_transition(mut self, transition: bool) -> Self {
        self.transition = transition;
        self
    }

    /// Geometry for the given progress.
    pub fn geometry(&self, progress: f64) -> IndicatorGeometry {
        let center = Point::new(CIRCLE_RADIUS, CIRCLE_RADIUS);
        IndicatorGeometry {
            width: self.width,
            view_box: Rect::new(0.0, 0.0, 2.0 * CIRCLE_RADIUS, 2.0 * CIRCLE_RADIUS),
            background: self
                .background
                .then(|| Circle::new(center, CIRCLE_RADIUS)),
            outline: self
                .outline
                .then(|| Circle::new(center, CIRCLE_RADIUS - STROKE_WIDTH / 2.0)),
            stroke_width: STROKE_WIDTH,
            wedge: remaining_wedge(progress),
            color: self.color,
            running: is_running(progress),
            bounce: self.transition,
        }
    }
}

/// Resolved indicator geometry, in view-box units.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorGeometry {
    /// Rendered width and height, in pixels.
    pub width: f64,
    /// The view box.
    pub view_box: Rect,
    /// Background disc.
    pub background: Option<Circle>,
    /// Outline ring centre line.
    pub outline: Option<Circle>,
    /// Stroke width of the background and outline.
    pub stroke_width: f64,
    /// Wedge covering the remaining fraction. Empty when complete.
    pub wedge: BezPath,
    /// Colour of every layer.
    pub color: TimerColor,
    /// Whether the run is in progress.
    pub running: bool,
    /// Whether the bounce transition applies.
    pub bounce: bool,
}

impl IndicatorGeometry {
    /// Class list of the container element.
    pub fn container_class(&self) -> &'static str {
        "circular-timer-container"
    }

    /// Class list of the background layer.
    pub fn background_class(&self) -> String {
        format!("circular-timer {}", self.color.class_name())
    }

    /// Class list of the wedge and outline layers.
    pub fn layer_class(&self) -> String {
        let mut class = self.background_class();
        if self.bounce {
            class.push_str(" bounce");
        }
        if self.running {
            class.push_str(" running");
        }
        class
    }
}

/// Whether a run at `progress` is under way.
pub fn is_running(progress: f64) -> bool {
    progress > 0.0 && progress < 1.0
}

/// The wedge for the fraction of time remaining.
///
/// The wedge starts at 12 o'clock and runs clockwise, centred in the view box: a full disc at
/// progress 0, shrinking to nothing at progress 1.
pub fn remaining_wedge(progress: f64) -> BezPath {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);
    let circle = Circle::new((CIRCLE_RADIUS, CIRCLE_RADIUS), CIRCLE_RADIUS);
    if remaining <= 0.0 {
        return BezPath::new();
    }
    if remaining >= 1.0 {
        return circle.to_path(TOLERANCE);
    }
    circle
        .segment(0.0, -FRAC_PI_2, remaining * TAU)
        .path_elements(TOLERANCE)
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.5
    }

    #[test]
    fn defaults_match_indicator_props() {
        let spec = IndicatorSpec::default();
        assert_eq!(spec.width, 22.0, "width");
        assert_eq!(spec.color, TimerColor::TimelineGreen, "colour");
        assert!(spec.background && spec.outline && !spec.transition, "layers");
    }

    #[test]
    fn wedge_shrinks_to_nothing() {
        let full = remaining_wedge(0.0).bounding_box();
        assert!(close(full.x0, 0.0) && close(full.x1, 200.0), "full disc width");
        assert!(close(full.y0, 0.0) && close(full.y1, 200.0), "full disc height");
        assert!(remaining_wedge(1.0).elements().is_empty(), "nothing left");
        assert!(remaining_wedge(1.5).elements().is_empty(), "clamped");
    }

    #[test]
    fn half_wedge_covers_right_half() {
        let half = remaining_wedge(0.5).bounding_box();
        assert!(close(half.x0, 100.0), "starts at the centre line, x0 = {}", half.x0);
        assert!(close(half.x1, 200.0), "reaches the right edge, x1 = {}", half.x1);
        assert!(close(half.y0, 0.0) && close(half.y1, 200.0), "top to bottom");
    }

    #[test]
    fn last_quarter_covers_top_right() {
        let quarter = remaining_wedge(0.75).bounding_box();
        assert!(close(quarter.x0, 100.0) && close(quarter.x1, 200.0), "right half");
        assert!(close(quarter.y0, 0.0) && close(quarter.y1, 100.0), "top half");
    }

    #[test]
    fn running_and_classes() {
        let spec = IndicatorSpec::default().with_transition(true);
        let idle = spec.geometry(0.0);
        assert!(!idle.running, "not running at 0");
        assert_eq!(idle.layer_class(), "circular-timer timeline-green bounce", "idle classes");
        let mid = spec.geometry(0.3);
        assert_eq!(
            mid.layer_class(),
            "circular-timer timeline-green bounce running",
            "running classes"
        );
        assert!(!spec.geometry(1.0).running, "not running at 1");
        let outline = mid.outline.unwrap();
        assert_eq!(outline.radius, 92.5, "outline inset by half a stroke");
    }

    #[test]
    fn colour_names_round_trip_through_serde() {
        for color in TimerColor::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, std::format!("\"{}\"", color.class_name()), "serde name");
        }
    }
}
