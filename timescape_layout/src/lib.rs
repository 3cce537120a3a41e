// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout for a horizontal activity timeline.
//!
//! This crate turns a list of activity entries into chart geometry:
//! - a **time window** of whole days around "now",
//! - a linear **axis scale** from timestamps onto percentage x coordinates,
//! - **header** ticks and labels spaced so at most a configured number are labelled,
//! - **rows** of plot-lines, one per active interval, clamped to the visible range, and
//! - **tooltip** placement that keeps the tooltip inside the chart.
//!
//! Nothing here renders. Geometry is plain data (x in percent, y in pixels) that a renderer
//! turns into SVG, DOM, or a scene.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod activity;
mod chart;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod header;
mod options;
mod row;
mod scale;
mod ticks;
mod tooltip;
mod window;

pub use activity::{ActivityCounts, ActivityInterval, ActivityRanges, ActivitySummaryEntry};
pub use chart::{BODY_BOTTOM_GUTTER, BodyLayout, FutureOverlay, TimelineInput, TimelineLayout};
pub use error::{Result, TimelineError};
pub use format::{format_date, is_valid_date_format};
pub use header::{HeaderLabel, HeaderLayout, HeaderTick, NowFlag};
pub use options::{SCROLLBAR_BORDER_PX, TextAnchor, TimelineOptions, header_padding_right};
pub use row::{
    EndCap, LEFT_EDGE_X, ONGOING_X, PlotLineGeometry, RowBounds, RowLayout, cap_for_point,
};
pub use scale::{AxisScale, FULL_WIDTH};
pub use ticks::{DayTick, TickLayout};
pub use tooltip::{
    AnchorEdge, HorizontalSide, HoveredPlotLine, TooltipPlacement, TooltipState, VerticalSide,
    ViewportMetrics, dates_active_text, place_tooltip,
};
#[cfg(feature = "std")]
pub use window::SystemClock;
pub use window::{DAY_MS, Days, FixedClock, TimeWindow, Timestamp, WallClock};
