use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Handle of one requested display frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameRequestId(u64);

impl FrameRequestId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Host display-refresh clock.
///
/// The host calls back into the engine with the returned id once the frame is
/// due. A cancelled id must never be delivered; engines additionally ignore ids
/// they no longer wait for.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequestId;
    fn cancel_frame(&mut self, id: FrameRequestId);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self) -> FrameRequestId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        (**self).cancel_frame(id);
    }
}

/// Lets several engines share one host clock.
impl<S: FrameScheduler> FrameScheduler for Rc<RefCell<S>> {
    fn request_frame(&mut self) -> FrameRequestId {
        self.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        self.borrow_mut().cancel_frame(id);
    }
}

/// Headless frame queue driven explicitly by the caller.
///
/// Used by tests and offscreen rendering: requested frames accumulate until
/// `take_due` drains them.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    pending: VecDeque<FrameRequestId>,
    cancelled: Vec<FrameRequestId>,
    requested_total: u64,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> &VecDeque<FrameRequestId> {
        &self.pending
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Every id cancelled so far, in cancellation order.
    #[must_use]
    pub fn cancelled(&self) -> &[FrameRequestId] {
        &self.cancelled
    }

    #[must_use]
    pub fn requested_total(&self) -> u64 {
        self.requested_total
    }

    /// Drains the frames that are due now, oldest first.
    pub fn take_due(&mut self) -> Vec<FrameRequestId> {
        self.pending.drain(..).collect()
    }

    pub fn take_next(&mut self) -> Option<FrameRequestId> {
        self.pending.pop_front()
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        self.requested_total += 1;
        let id = FrameRequestId::new(self.next_id);
        self.pending.push_back(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != id);
        if self.pending.len() != before {
            self.cancelled.push(id);
        }
    }
}
