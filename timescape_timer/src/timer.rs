// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A frame-driven progress timer.
//!
//! [`ProgressTimer`] measures elapsed time against a duration and reports progress from 0 to 1.
//! It never reads a clock itself: each frame callback passes in the current monotonic time, so
//! the same timer runs under a browser's animation frames, a game loop, or a test.
//!
//! At most one frame is pending per timer. Any frame the timer did not request last, including
//! frames that were cancelled after being handed to the host, is ignored without side effects.

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::frame::{FrameId, FrameScheduler};

/// Timer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerOptions {
    /// Run length, in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Whether a completed run immediately starts the next one.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Whether the timer starts when mounted. Toggling it restarts the timer.
    pub start: bool,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            duration_ms: 60_000,
            looping: false,
            start: false,
        }
    }
}

impl TimerOptions {
    /// Sets the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets whether the timer loops.
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Sets whether the timer starts on mount.
    pub fn with_start(mut self, start: bool) -> Self {
        self.start = start;
        self
    }

    /// Run length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Where a timer is in its run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimerPhase {
    /// Not running.
    #[default]
    Idle,
    /// Counting towards completion.
    Running,
    /// Reached 1 and fired its completion callback. Only observable when the callback or caller
    /// inspects the timer between completion and the follow-up stop.
    Complete,
}

/// What a frame callback did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The frame was stale, cancelled, or arrived while idle.
    Ignored,
    /// Progress was published and another frame requested.
    Progress(f64),
    /// The run completed.
    ///
    /// This is where progress 1 is published. A looping timer has already reset
    /// [`ProgressTimer::progress`] to 0 by the time the outcome is returned.
    Completed {
        /// Progress of the finished run, always 1.
        progress: f64,
        /// Whether a new run started.
        restarted: bool,
    },
}

/// A cancellable progress timer.
pub struct ProgressTimer {
    options: TimerOptions,
    on_complete: Option<Box<dyn FnMut()>>,
    start_time: Option<Duration>,
    progress: f64,
    phase: TimerPhase,
    pending: Option<FrameId>,
    cancelled: bool,
    completions: u64,
}

impl fmt::Debug for ProgressTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTimer")
            .field("options", &self.options)
            .field("on_complete", &self.on_complete.is_some())
            .field("start_time", &self.start_time)
            .field("progress", &self.progress)
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .field("cancelled", &self.cancelled)
            .field("completions", &self.completions)
            .finish()
    }
}

impl ProgressTimer {
    /// Creates an idle timer.
    pub fn new(options: TimerOptions) -> Self {
        Self {
            options,
            on_complete: None,
            start_time: None,
            progress: 0.0,
            phase: TimerPhase::Idle,
            pending: None,
            cancelled: false,
            completions: 0,
        }
    }

    /// Sets the callback fired once per completed run.
    pub fn with_on_complete(mut self, on_complete: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Current options.
    pub fn options(&self) -> &TimerOptions {
        &self.options
    }

    /// Progress of the current (or last) run, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Start of the current run, if running.
    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    /// The frame the timer is waiting for.
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    /// Whether [`ProgressTimer::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of completed runs.
    pub fn completions(&self) -> u64 {
        self.completions
    }

    /// Attaches the timer to its host, starting it if [`TimerOptions::start`] is set.
    pub fn mount(&mut self, now: Duration, frames: &mut impl FrameScheduler) {
        if self.options.start {
            self.start(now, frames);
        }
    }

    /// Starts a run at `now`, replacing any run in progress.
    ///
    /// Returns the first frame of the run, or `None` once the timer has been cancelled.
    pub fn start(&mut self, now: Duration, frames: &mut impl FrameScheduler) -> Option<FrameId> {
        if self.cancelled {
            return None;
        }
        self.cancel_pending(frames);
        self.start_time = Some(now);
        self.progress = 0.0;
        self.phase = TimerPhase::Running;
        let id = frames.request_frame();
        self.pending = Some(id);
        tracing::debug!(
            duration_ms = self.options.duration_ms,
            looping = self.options.looping,
            "timer started"
        );
        Some(id)
    }

    /// Stops the current run. A looping timer starts a new run instead.
    pub fn stop(&mut self, now: Duration, frames: &mut impl FrameScheduler) {
        self.cancel_pending(frames);
        self.start_time = None;
        self.phase = TimerPhase::Idle;
        tracing::debug!(progress = self.progress, "timer stopped");
        if self.options.looping {
            self.start(now, frames);
        }
    }

    /// Discards the current run and starts over from 0.
    pub fn restart(&mut self, now: Duration, frames: &mut impl FrameScheduler) -> Option<FrameId> {
        if self.cancelled {
            return None;
        }
        self.cancel_pending(frames);
        self.start_time = None;
        self.progress = 0.0;
        tracing::debug!("timer restarted");
        self.start(now, frames)
    }

    /// Updates the start trigger. Any change restarts the timer.
    pub fn set_start(&mut self, start: bool, now: Duration, frames: &mut impl FrameScheduler) {
        if start != self.options.start {
            self.options.start = start;
            self.restart(now, frames);
        }
    }

    /// Replaces the duration and loop settings without disturbing the current run.
    pub fn set_options(&mut self, options: TimerOptions) {
        let start = self.options.start;
        self.options = TimerOptions { start, ..options };
    }

    /// Handles frame `id` at time `now`.
    ///
    /// Frames other than the pending one are ignored, so a frame cancelled after the host
    /// already dequeued it can never publish progress.
    pub fn on_frame(
        &mut self,
        id: FrameId,
        now: Duration,
        frames: &mut impl FrameScheduler,
    ) -> FrameOutcome {
        if self.cancelled || self.pending != Some(id) {
            return FrameOutcome::Ignored;
        }
        self.pending = None;
        let Some(start) = self.start_time else {
            return FrameOutcome::Ignored;
        };

        let ratio = elapsed_ratio(now.saturating_sub(start), self.options.duration());
        if ratio < 1.0 {
            self.progress = self.progress.max(ratio);
            self.pending = Some(frames.request_frame());
            tracing::trace!(progress = self.progress, "timer frame");
            return FrameOutcome::Progress(self.progress);
        }

        let progress = 1.0;
        self.progress = progress;
        self.phase = TimerPhase::Complete;
        self.completions += 1;
        tracing::debug!(completions = self.completions, "timer complete");
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
        self.stop(now, frames);
        FrameOutcome::Completed {
            progress,
            restarted: self.phase == TimerPhase::Running,
        }
    }

    /// Permanently detaches the timer, cancelling its pending frame.
    ///
    /// No progress is published after this returns, even for frames the host has already taken.
    pub fn cancel(&mut self, frames: &mut impl FrameScheduler) {
        self.cancel_pending(frames);
        self.cancelled = true;
        self.start_time = None;
        self.phase = TimerPhase::Idle;
    }

    fn cancel_pending(&mut self, frames: &mut impl FrameScheduler) {
        if let Some(id) = self.pending.take() {
            frames.cancel_frame(id);
        }
    }
}

/// Elapsed fraction of `duration`. A zero duration is complete immediately.
fn elapsed_ratio(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    elapsed.as_secs_f64() / duration.as_secs_f64()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::cell::Cell;
    use std::rc::Rc;
    use std::vec::Vec;

    use super::*;
    use crate::frame::FrameQueue;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    /// Runs one batch of frames at `now`.
    fn tick(
        timer: &mut ProgressTimer,
        queue: &mut FrameQueue,
        now: Duration,
    ) -> Vec<FrameOutcome> {
        let mut outcomes = Vec::new();
        queue.dispatch(|id, q| outcomes.push(timer.on_frame(id, now, q)));
        outcomes
    }

    fn counting_timer(options: TimerOptions) -> (ProgressTimer, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let timer = ProgressTimer::new(options).with_on_complete(move || seen.set(seen.get() + 1));
        (timer, count)
    }

    #[test]
    fn mount_without_start_stays_idle() {
        let mut queue = FrameQueue::new();
        let mut timer = ProgressTimer::new(TimerOptions::default());
        timer.mount(ms(0), &mut queue);
        assert_eq!(timer.phase(), TimerPhase::Idle, "not started");
        assert!(queue.is_empty(), "no frame requested");
        assert_eq!(timer.progress(), 0.0, "no progress");
    }

    #[test]
    fn progress_is_half_way_at_half_duration() {
        let mut queue = FrameQueue::new();
        let options = TimerOptions::default()
            .with_duration(ms(1000))
            .with_start(true);
        let mut timer = ProgressTimer::new(options);
        timer.mount(ms(0), &mut queue);
        assert_eq!(timer.phase(), TimerPhase::Running, "started on mount");
        assert_eq!(tick(&mut timer, &mut queue, ms(500)), [FrameOutcome::Progress(0.5)], "half");
        assert_eq!(queue.len(), 1, "next frame requested");
    }

    #[test]
    fn completes_exactly_once() {
        let mut queue = FrameQueue::new();
        let (mut timer, count) = counting_timer(TimerOptions::default().with_duration(ms(1000)));
        timer.start(ms(0), &mut queue);
        tick(&mut timer, &mut queue, ms(400));
        let outcomes = tick(&mut timer, &mut queue, ms(1200));
        assert_eq!(
            outcomes,
            [FrameOutcome::Completed { progress: 1.0, restarted: false }],
            "completed"
        );
        assert_eq!(count.get(), 1, "callback fired once");
        assert_eq!(timer.progress(), 1.0, "progress reached exactly 1");
        assert_eq!(timer.phase(), TimerPhase::Idle, "stopped after completion");
        assert!(queue.is_empty(), "no more frames");
        assert!(tick(&mut timer, &mut queue, ms(2000)).is_empty(), "nothing left to run");
        assert_eq!(count.get(), 1, "still once");
    }

    #[test]
    fn progress_never_decreases() {
        let mut queue = FrameQueue::new();
        let mut timer = ProgressTimer::new(TimerOptions::default().with_duration(ms(1000)));
        timer.start(ms(100), &mut queue);
        let mut last = 0.0;
        for now in [200, 350, 300, 700, 650, 900] {
            tick(&mut timer, &mut queue, ms(now));
            assert!(timer.progress() >= last, "monotonic at {now}");
            last = timer.progress();
        }
    }

    #[test]
    fn looping_restarts_and_completes_each_cycle() {
        let mut queue = FrameQueue::new();
        let options = TimerOptions::default().with_duration(ms(1000)).with_loop(true);
        let (mut timer, count) = counting_timer(options);
        timer.start(ms(0), &mut queue);
        let outcomes = tick(&mut timer, &mut queue, ms(1000));
        assert_eq!(
            outcomes,
            [FrameOutcome::Completed { progress: 1.0, restarted: true }],
            "loop completion publishes 1"
        );
        assert_eq!(timer.progress(), 0.0, "reset for the next cycle");
        assert_eq!(timer.start_time(), Some(ms(1000)), "new run starts at completion");
        assert_eq!(
            tick(&mut timer, &mut queue, ms(1250)),
            [FrameOutcome::Progress(0.25)],
            "climbing again"
        );
        tick(&mut timer, &mut queue, ms(2000));
        assert_eq!(count.get(), 2, "one callback per cycle");
    }

    #[test]
    fn stop_on_looping_timer_restarts() {
        let mut queue = FrameQueue::new();
        let mut timer = ProgressTimer::new(TimerOptions::default().with_loop(true));
        timer.start(ms(0), &mut queue);
        timer.stop(ms(10), &mut queue);
        assert_eq!(timer.phase(), TimerPhase::Running, "loop takes precedence");
        assert_eq!(queue.len(), 1, "exactly one pending frame");
    }

    #[test]
    fn cancel_suppresses_already_dequeued_frame() {
        let mut queue = FrameQueue::new();
        let mut timer = ProgressTimer::new(TimerOptions::default().with_duration(ms(1000)));
        timer.start(ms(0), &mut queue);
        let due = queue.take_due();
        timer.cancel(&mut queue);
        for id in due {
            assert_eq!(
                timer.on_frame(id, ms(500), &mut queue),
                FrameOutcome::Ignored,
                "stale frame after cancel"
            );
        }
        assert_eq!(timer.progress(), 0.0, "no update observed");
        assert!(queue.is_empty(), "nothing rescheduled");
        assert_eq!(timer.start(ms(600), &mut queue), None, "cancelled timers stay dead");
    }

    #[test]
    fn restart_after_cancel_does_nothing() {
        let mut queue = FrameQueue::new();
        let mut timer = ProgressTimer::new(TimerOptions::default().with_duration(ms(1000)));
        timer.start(ms(0), &mut queue);
        tick(&mut timer, &mut queue, ms(300));
        timer.cancel(&mut queue);
        assert_eq!(timer.restart(ms(400), &mut queue), None, "no run after cancel");
        assert!(queue.is_empty(), "no frame requested");
        assert_eq!(timer.progress(), 0.3, "progress left as it was");
        assert_eq!(timer.phase(), TimerPhase::Idle, "still idle");
    }

    #[test]
    fn toggling_start_restarts_from_zero() {
        let mut queue = FrameQueue::new();
        let mut timer = ProgressTimer::new(TimerOptions::default().with_duration(ms(1000)));
        timer.start(ms(0), &mut queue);
        tick(&mut timer, &mut queue, ms(600));
        let stale = timer.pending_frame();
        timer.set_start(true, ms(700), &mut queue);
        assert_eq!(timer.progress(), 0.0, "reset");
        assert_eq!(timer.start_time(), Some(ms(700)), "new start");
        assert!(
            stale.is_some_and(|id| !queue.is_pending(id)),
            "previous frame cancelled"
        );
        assert_eq!(queue.len(), 1, "one pending frame");
        timer.set_start(true, ms(800), &mut queue);
        assert_eq!(timer.start_time(), Some(ms(700)), "unchanged trigger is a no-op");
    }

    #[test]
    fn zero_duration_completes_on_first_frame() {
        let mut queue = FrameQueue::new();
        let (mut timer, count) = counting_timer(TimerOptions::default().with_duration(ms(0)));
        timer.start(ms(5), &mut queue);
        let outcomes = tick(&mut timer, &mut queue, ms(5));
        assert_eq!(
            outcomes,
            [FrameOutcome::Completed { progress: 1.0, restarted: false }],
            "immediate"
        );
        assert_eq!(count.get(), 1, "callback fired");
    }

    #[test]
    fn options_parse_with_defaults() {
        let options: TimerOptions = serde_json::from_str(r#"{"loop": true}"#).unwrap();
        assert!(options.looping, "loop parsed");
        assert_eq!(options.duration(), Duration::from_secs(60), "default duration");
        assert!(!options.start, "default start");
    }
}
