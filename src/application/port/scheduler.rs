// SPDX-License-Identifier: MPL-2.0
//! Scheduler port definition.
//!
//! Dismiss timers and settle delays are both "deliver this message later".
//! Every scheduled delivery gets a [`TimerHandle`] so a superseding dismissal
//! can cancel it.

use crate::notifications::Message;
use std::time::Duration;

/// Cancellation handle for one scheduled delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Port for deferred message delivery.
///
/// Implementations feed each scheduled message back into
/// `Queue::handle_message` once `delay` has passed, unless cancelled first.
/// Cancelling a handle that already fired is a no-op.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}
