// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A frame-driven progress timer and its circular indicator.
//!
//! - [`ProgressTimer`] is a small state machine (idle, running, complete) advanced by frame
//!   callbacks. It reports monotonic progress from 0 to 1, fires a completion callback once per
//!   run, optionally loops, and can be cancelled so that no later frame has any effect.
//! - [`FrameScheduler`] is the seam to the host's frame loop; [`FrameQueue`] is a cooperative
//!   implementation for tests and offline rendering.
//! - [`IndicatorSpec`] turns a progress value into `kurbo` geometry for a countdown wedge.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod clock;
mod frame;
mod indicator;
mod labeled;
mod timer;

#[cfg(feature = "std")]
pub use clock::InstantClock;
pub use clock::{ManualClock, MonotonicClock};
pub use frame::{FrameId, FrameQueue, FrameScheduler};
pub use indicator::{
    CIRCLE_RADIUS, IndicatorGeometry, IndicatorSpec, STROKE_WIDTH, TimerColor, is_running,
    remaining_wedge,
};
pub use labeled::{LABELED_INDICATOR_WIDTH, LabeledTimerSpec};
pub use timer::{FrameOutcome, ProgressTimer, TimerOptions, TimerPhase};
