// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement for a hovered plot-line.
//!
//! The tooltip flips sides so it stays inside the chart:
//! - horizontally it hangs off whichever side of the line's centre has more room, and
//! - vertically it renders below lines in the upper half of the scroll viewport, and above
//!   lines in the lower half.
//!
//! Viewport measurements come from the rendering layer as plain numbers.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use chrono::{FixedOffset, NaiveTime};
use serde::Serialize;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::activity::ActivityInterval;
use crate::format::format_date;
use crate::row::{PlotLineGeometry, RowLayout};
use crate::scale::FULL_WIDTH;

const CENTRE: f64 = FULL_WIDTH / 2.0;

/// Gap, in percent, kept between the tooltip and the chart edge it hangs towards.
const EDGE_GAP: f64 = 2.0;

/// Vertical translation applied when the tooltip renders below the line.
const BELOW_TRANSLATE_Y: f64 = 18.0;
/// Vertical translation applied when the tooltip renders above the line.
const ABOVE_TRANSLATE_Y: f64 = -118.0;
/// Horizontal translation that centres the tooltip on its anchor.
const CENTRED_TRANSLATE_X: f64 = -50.0;

/// Which side of the line's centre the tooltip's arrow points from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalSide {
    /// Line centre is left of the chart centre.
    Left,
    /// Line centre is right of the chart centre.
    Right,
    /// Line centre is exactly on the chart centre.
    Middle,
}

impl HorizontalSide {
    /// Lowercase name, as used for the arrow class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
        }
    }
}

/// Where the hovered line sits in the visible viewport.
///
/// `Top` lines get their tooltip rendered below them; `Bottom` lines get it above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSide {
    /// Upper half of the viewport.
    Top,
    /// Lower half of the viewport.
    Bottom,
}

impl VerticalSide {
    /// Lowercase name, as used for the side class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// The CSS property the horizontal offset is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorEdge {
    /// Offset from the left edge.
    Left,
    /// Offset from the right edge.
    Right,
}

/// Scroll state of the ancestor that scrolls the chart body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ViewportMetrics {
    /// Vertical scroll offset, in pixels.
    pub scroll_offset: f64,
    /// Visible height, in pixels.
    pub visible_height: f64,
}

/// Final tooltip placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TooltipPlacement {
    /// Horizontal side.
    pub horizontal_side: HorizontalSide,
    /// Vertical side.
    pub vertical_side: VerticalSide,
    /// Offset from [`TooltipPlacement::anchor_edge`], in percent.
    pub horizontal_offset_percent: f64,
    /// Edge the horizontal offset is measured from.
    pub anchor_edge: AnchorEdge,
    /// Top of the anchor, in whole pixels.
    pub vertical_anchor_px: f64,
    /// Vertical translation, in percent of the tooltip's height.
    pub translate_y_percent: f64,
    /// Horizontal translation, in percent of the tooltip's width, when centred.
    pub translate_x_percent: Option<f64>,
}

impl TooltipPlacement {
    /// Places a tooltip for `line` within `viewport`.
    pub fn new(line: &PlotLineGeometry, viewport: ViewportMetrics) -> Self {
        let x_middle = line.x_middle();
        let horizontal_side = if x_middle < CENTRE {
            HorizontalSide::Left
        } else if x_middle > CENTRE {
            HorizontalSide::Right
        } else {
            HorizontalSide::Middle
        };
        let horizontal_offset_percent = if x_middle <= CENTRE {
            x_middle - EDGE_GAP
        } else {
            FULL_WIDTH - EDGE_GAP - x_middle
        };
        let vertical_side =
            if line.y_middle - viewport.scroll_offset < viewport.visible_height / 2.0 {
                VerticalSide::Top
            } else {
                VerticalSide::Bottom
            };
        let anchor_edge = match horizontal_side {
            HorizontalSide::Right => AnchorEdge::Right,
            HorizontalSide::Left | HorizontalSide::Middle => AnchorEdge::Left,
        };
        Self {
            horizontal_side,
            vertical_side,
            horizontal_offset_percent,
            anchor_edge,
            vertical_anchor_px: line.y_middle.round(),
            translate_y_percent: match vertical_side {
                VerticalSide::Top => BELOW_TRANSLATE_Y,
                VerticalSide::Bottom => ABOVE_TRANSLATE_Y,
            },
            translate_x_percent: (horizontal_side == HorizontalSide::Middle)
                .then_some(CENTRED_TRANSLATE_X),
        }
    }

    /// CSS transform string for the anchor translation.
    pub fn transform(&self) -> String {
        match self.translate_x_percent {
            Some(x) => format!("translateY({}%) translateX({}%)", self.translate_y_percent, x),
            None => format!("translateY({}%)", self.translate_y_percent),
        }
    }

    /// Class list for the tooltip element.
    pub fn class_name(&self, hidden: bool) -> String {
        let mut class = format!(
            "timeline-tooltip arrow-{} {}",
            self.horizontal_side.as_str(),
            self.vertical_side.as_str()
        );
        if hidden {
            class.push_str(" hidden");
        }
        class
    }
}

/// Places a tooltip for the hovered line, if any.
///
/// With nothing hovered there is nothing to place; this never fails.
pub fn place_tooltip(
    hovered: Option<&PlotLineGeometry>,
    viewport: ViewportMetrics,
) -> Option<TooltipPlacement> {
    hovered.map(|line| TooltipPlacement::new(line, viewport))
}

/// A hovered plot-line together with its entry name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoveredPlotLine {
    /// Entry name.
    pub name: String,
    /// Line geometry.
    pub geometry: PlotLineGeometry,
}

impl HoveredPlotLine {
    /// Picks line `line` of `row`, if it exists.
    pub fn from_row(row: &RowLayout, line: usize) -> Option<Self> {
        row.plot_lines.get(line).map(|geometry| Self {
            name: row.name.clone(),
            geometry: *geometry,
        })
    }
}

/// Tooltip visibility and payload for one chart.
///
/// Starts empty, is filled on hover-enter and cleared on hover-leave.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    data: Option<HoveredPlotLine>,
}

impl TooltipState {
    /// Creates an empty, hidden tooltip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the tooltip for `data`. `None` hides it.
    pub fn show(&mut self, data: Option<HoveredPlotLine>) {
        self.data = data;
    }

    /// Hides the tooltip and drops its payload.
    pub fn hide(&mut self) {
        self.data = None;
    }

    /// Whether the tooltip is showing.
    pub fn is_visible(&self) -> bool {
        self.data.is_some()
    }

    /// The hovered line, while visible.
    pub fn data(&self) -> Option<&HoveredPlotLine> {
        self.data.as_ref()
    }

    /// Placement of the visible tooltip.
    pub fn placement(&self, viewport: ViewportMetrics) -> Option<TooltipPlacement> {
        place_tooltip(self.data.as_ref().map(|d| &d.geometry), viewport)
    }
}

/// Text shown for a line's dates, e.g. `Active Mar 5, 2024 → Ongoing`.
///
/// The end date is snapped to the start of its day in `offset`. A missing start reads `Unknown`.
pub fn dates_active_text(dates: &ActivityInterval, offset: FixedOffset, format: &str) -> String {
    let start = dates.start.map_or_else(
        || String::from("Unknown"),
        |start| format_date(&start.with_timezone(&offset), format),
    );
    let end = match dates.end {
        None => String::from("Ongoing"),
        Some(end) => {
            let local = end.with_timezone(&offset);
            let day_start = local
                .date_naive()
                .and_time(NaiveTime::MIN)
                .and_local_timezone(offset)
                .single()
                .unwrap_or(local);
            format_date(&day_start, format)
        }
    };
    format!("Active {start} \u{2192} {end}")
}
