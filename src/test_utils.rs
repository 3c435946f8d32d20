// SPDX-License-Identifier: MPL-2.0
//! Test doubles for driving the queue without a window system or a runtime.
//!
//! - [`ManualScheduler`]: virtual clock; scheduled messages fire only when
//!   the test advances time
//! - [`RecordingSurface`]: fake surface that logs what the queue asked for

use crate::application::port::{Presentation, PresentationSurface, Scheduler, TimerHandle};
use crate::error::SurfaceError;
use crate::notifications::{Message, Queue, Toast, ToastId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug)]
struct Entry {
    handle: TimerHandle,
    due: Duration,
    message: Message,
}

/// Scheduler running on a virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    entries: Vec<Entry>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of scheduled, not yet fired or cancelled, messages.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.entries.len()
    }

    /// Due time of the earliest scheduled message.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Removes the earliest message due at or before `until` and moves the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<Message> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.handle.value()))
            .map(|(index, _)| index)?;
        let entry = self.entries.remove(index);
        self.now = self.now.max(entry.due);
        Some(entry.message)
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle::from_raw(self.next_handle);
        self.entries.push(Entry {
            handle,
            due: self.now + delay,
            message,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|entry| entry.handle != handle);
    }
}

impl<S: PresentationSurface> Queue<S, ManualScheduler> {
    /// Advances virtual time, delivering every message that falls due,
    /// including messages scheduled by earlier deliveries.
    pub fn advance_clock(&mut self, duration: Duration) {
        let target = self.scheduler().now() + duration;
        while let Some(message) = self.scheduler_mut().pop_due(target) {
            self.handle_message(message);
        }
        self.scheduler_mut().set_now(target);
    }
}

/// What a [`RecordingSurface`] was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Presented { id: ToastId, height: f32 },
    Dismissed { animated: bool },
    ContentChanged(ToastId),
}

#[derive(Debug)]
struct SurfaceState {
    events: Vec<SurfaceEvent>,
    outcome: Result<Presentation, SurfaceError>,
}

/// Fake surface sharing its log between clones.
///
/// Keep a clone in the test while the queue owns the other one.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl RecordingSurface {
    /// A surface whose presentations complete immediately.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SurfaceState {
                events: Vec::new(),
                outcome: Ok(Presentation::Shown),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets what subsequent `present` calls return.
    pub fn set_outcome(&self, outcome: Result<Presentation, SurfaceError>) {
        self.lock().outcome = outcome;
    }

    #[must_use]
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.lock().events.clone()
    }

    /// Ids of successfully presented toasts, in order.
    #[must_use]
    pub fn presented(&self) -> Vec<ToastId> {
        self.lock()
            .events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Presented { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn dismissals(&self) -> usize {
        self.lock()
            .events
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Dismissed { .. }))
            .count()
    }

    #[must_use]
    pub fn last_height(&self) -> Option<f32> {
        self.lock().events.iter().rev().find_map(|event| match event {
            SurfaceEvent::Presented { height, .. } => Some(*height),
            _ => None,
        })
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSurface for RecordingSurface {
    fn present(&mut self, toast: &Toast, height: f32) -> Result<Presentation, SurfaceError> {
        let mut state = self.lock();
        let outcome = state.outcome.clone();
        if outcome.is_ok() {
            state.events.push(SurfaceEvent::Presented {
                id: toast.id(),
                height,
            });
        }
        outcome
    }

    fn dismiss(&mut self, animate: bool) {
        self.lock()
            .events
            .push(SurfaceEvent::Dismissed { animated: animate });
    }

    fn content_changed(&mut self, toast: &Toast) {
        self.lock()
            .events
            .push(SurfaceEvent::ContentChanged(toast.id()));
    }
}
