// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling.
//!
//! A [`FrameScheduler`] hands out one [`FrameId`] per requested frame and forgets ids that are
//! cancelled. The host decides when frames run: a browser would map this onto
//! `requestAnimationFrame`, while [`FrameQueue`] runs them cooperatively in batches.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Identifies one requested frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

impl FrameId {
    /// Raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Something that can run a callback on a later frame.
pub trait FrameScheduler {
    /// Requests a callback on the next frame.
    fn request_frame(&mut self) -> FrameId;

    /// Cancels a requested frame. Cancelling an unknown or already-run frame does nothing.
    fn cancel_frame(&mut self, id: FrameId);
}

/// A cooperative, single-threaded frame queue.
///
/// Frames run in request order. Frames requested while a batch is being dispatched land in the
/// next batch, never the current one.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameId>,
    running: VecDeque<FrameId>,
}

impl FrameQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames waiting for the next batch.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no frames are waiting for the next batch.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether `id` has been requested and has neither run nor been cancelled.
    pub fn is_pending(&self, id: FrameId) -> bool {
        self.pending.contains(&id) || self.running.contains(&id)
    }

    /// Removes and returns the next batch, in request order.
    ///
    /// The caller takes over running these frames; cancelling one of them afterwards has no
    /// effect on the returned list.
    pub fn take_due(&mut self) -> Vec<FrameId> {
        core::mem::take(&mut self.pending)
    }

    /// Runs the next batch through `handler`, returning how many frames ran.
    ///
    /// The handler may request or cancel frames on the queue it is given. A frame cancelled by an
    /// earlier handler in the same batch does not run.
    pub fn dispatch(&mut self, mut handler: impl FnMut(FrameId, &mut Self)) -> usize {
        self.running = self.take_due().into();
        let mut ran = 0;
        while let Some(id) = self.running.pop_front() {
            handler(id, self);
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.pending.retain(|pending| *pending != id);
        self.running.retain(|running| *running != id);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn batches_run_in_request_order() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        assert_eq!(queue.take_due(), vec![a, b], "request order");
        assert!(queue.is_empty(), "batch taken");
    }

    #[test]
    fn requests_during_dispatch_wait_for_next_batch() {
        let mut queue = FrameQueue::new();
        queue.request_frame();
        let mut seen = Vec::new();
        let ran = queue.dispatch(|id, q| {
            seen.push(id);
            q.request_frame();
        });
        assert_eq!(ran, 1, "only the original frame ran");
        assert_eq!(queue.len(), 1, "follow-up frame queued");
        assert_eq!(seen.len(), 1, "handler called once");
    }

    #[test]
    fn cancelled_frames_never_run() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        queue.cancel_frame(a);
        assert!(!queue.is_pending(a), "cancelled");
        let mut seen = Vec::new();
        queue.dispatch(|id, _| seen.push(id));
        assert_eq!(seen, vec![b], "only b ran");
    }

    #[test]
    fn cancel_within_batch_skips_later_frame() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        let mut seen = Vec::new();
        queue.dispatch(|id, q| {
            seen.push(id);
            if id == a {
                q.cancel_frame(b);
            }
        });
        assert_eq!(seen, vec![a], "b was cancelled by a");
    }
}
