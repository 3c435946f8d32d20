// SPDX-License-Identifier: MPL-2.0
//! Toast queue lifecycle management.
//!
//! The [`Queue`] serializes presentation: at most one toast is on screen,
//! the rest wait in a backlog. It reacts to [`Message`]s coming from callers,
//! from its own scheduled timers, and from the presentation surface.
//!
//! # Lifecycle
//!
//! `pending → presenting (entry animation) → visible (dismiss timer) →
//! settling (exit animation) → next toast or idle`

use super::progress::ProgressStatus;
use super::toast::{Placement, Toast, ToastId};
use crate::application::port::{Presentation, PresentationSurface, Scheduler, TimerHandle};
use crate::config::{Config, DEFAULT_TOAST_HEIGHT};
use crate::diagnostics::{DiagnosticsHandle, DismissReason, QueueEventKind};
use crate::domain::toast::{DisplayDuration, SettleDelay};
use std::collections::VecDeque;

/// Messages for queue state changes.
#[derive(Debug)]
pub enum Message {
    /// Add a toast to the backlog.
    Enqueue(Toast, Placement),
    /// Drop the backlog, force-dismiss the current toast and show this one.
    ClearAndShow(Toast),
    /// End presentation of the current toast.
    Dismiss(DismissOptions),
    /// Present the next pending toast if the queue is idle.
    Advance,
    /// The user is dragging the current toast.
    DraggingUpdated,
    /// The drag gesture ended; `dismissing` tells whether it crossed the threshold.
    DraggingEnded { dismissing: bool },
    /// The surface finished the entry animation of this toast.
    EntryFinished(ToastId),
    /// The dismiss timer of this toast fired.
    DisplayTimeElapsed(ToastId),
    /// The exit animation of a dismissal is over.
    SettleElapsed(u64),
    /// The progress tracker of this toast reported a change.
    ProgressChanged(ToastId),
    /// The user pressed the button of this toast.
    ActionTriggered(ToastId),
    /// The software keyboard finished hiding; deferred presentations may open.
    KeyboardHidden,
}

/// Options for [`Queue::dismiss_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissOptions {
    /// Present the next pending toast once the exit animation settles.
    pub move_to_next: bool,
    /// Dismiss even while the user drags the toast.
    pub override_drag: bool,
    /// Let the surface animate the removal.
    pub animate: bool,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            move_to_next: true,
            override_drag: false,
            animate: true,
        }
    }
}

impl DismissOptions {
    #[must_use]
    pub fn without_animation() -> Self {
        Self {
            animate: false,
            ..Self::default()
        }
    }
}

/// What the queue is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing on screen, nothing pending presentation.
    Idle,
    /// A toast was handed to the surface; its entry animation runs.
    Presenting,
    /// A toast is fully on screen.
    Visible,
    /// A toast was dismissed; waiting for its exit animation.
    Settling,
}

/// Presentation settings resolved from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueSettings {
    /// Display time for toasts that do not set their own.
    pub display_duration: DisplayDuration,
    pub settle_delay: SettleDelay,
    pub toast_height: f32,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            display_duration: DisplayDuration::default(),
            settle_delay: SettleDelay::default(),
            toast_height: DEFAULT_TOAST_HEIGHT,
        }
    }
}

impl From<&Config> for QueueSettings {
    fn from(config: &Config) -> Self {
        Self {
            display_duration: config.display_duration(),
            settle_delay: config.settle_delay(),
            toast_height: config.toast_height(),
        }
    }
}

#[derive(Debug)]
struct Current {
    toast: Toast,
    entered: bool,
    timer: Option<TimerHandle>,
    /// The timer fired while the user was dragging.
    timer_elapsed: bool,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    generation: u64,
    move_to_next: bool,
}

/// Serializes toast presentation over a surface.
#[derive(Debug)]
pub struct Queue<S, T> {
    surface: S,
    scheduler: T,
    settings: QueueSettings,
    pending: VecDeque<Toast>,
    current: Option<Current>,
    settle: Option<Settle>,
    /// Replacement waiting for the settle delay of a `clear_and_show`.
    staged: Option<Toast>,
    is_dragging: bool,
    settle_generation: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: PresentationSurface, T: Scheduler> Queue<S, T> {
    /// Creates an idle queue with default settings.
    pub fn new(surface: S, scheduler: T) -> Self {
        Self::with_settings(surface, scheduler, QueueSettings::default())
    }

    pub fn with_settings(surface: S, scheduler: T, settings: QueueSettings) -> Self {
        Self {
            surface,
            scheduler,
            settings,
            pending: VecDeque::new(),
            current: None,
            settle: None,
            staged: None,
            is_dragging: false,
            settle_generation: 0,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for recording lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Handles a queue message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Enqueue(toast, placement) => self.enqueue(toast, placement),
            Message::ClearAndShow(toast) => self.clear_and_show(toast),
            Message::Dismiss(options) => {
                self.dismiss_current(options);
            }
            Message::Advance => self.advance(),
            Message::DraggingUpdated => self.dragging_updated(),
            Message::DraggingEnded { dismissing } => self.dragging_ended(dismissing),
            Message::EntryFinished(id) => self.entry_finished(id),
            Message::DisplayTimeElapsed(id) => self.display_time_elapsed(id),
            Message::SettleElapsed(generation) => self.settle_elapsed(generation),
            Message::ProgressChanged(id) => self.progress_changed(id),
            Message::ActionTriggered(id) => self.trigger_action(id),
            Message::KeyboardHidden => self.keyboard_hidden(),
        }
    }

    /// Adds a toast to the backlog.
    ///
    /// When the queue is idle the front of the backlog is presented right
    /// away, which is the new toast unless a paused backlog was waiting.
    pub fn enqueue(&mut self, mut toast: Toast, placement: Placement) {
        toast.apply_default_duration(self.settings.display_duration);
        let id = toast.id();
        match placement {
            Placement::First => self.pending.push_front(toast),
            Placement::Last => self.pending.push_back(toast),
        }
        tracing::debug!(%id, ?placement, pending = self.pending.len(), "toast enqueued");
        self.record(QueueEventKind::Enqueued {
            id,
            placement,
            pending: self.pending.len(),
        });

        if self.is_idle() {
            self.advance();
        }
    }

    /// Drops the backlog and shows `toast` as soon as the screen is free.
    ///
    /// The current toast is force-dismissed even while dragged; `toast`
    /// appears after the settle delay.
    pub fn clear_and_show(&mut self, mut toast: Toast) {
        toast.apply_default_duration(self.settings.display_duration);
        let discarded = self.pending.len() + usize::from(self.staged.is_some());
        self.pending.clear();
        self.staged = None;
        if discarded > 0 {
            self.record(QueueEventKind::Discarded { count: discarded });
        }

        if self.current.is_some() {
            self.dismiss_with_reason(
                DismissOptions {
                    move_to_next: false,
                    override_drag: true,
                    animate: true,
                },
                DismissReason::Replaced,
            );
            self.staged = Some(toast);
        } else if self.settle.is_some() {
            self.staged = Some(toast);
        } else {
            self.present(toast);
        }
    }

    /// Ends presentation of the current toast.
    ///
    /// Returns `false` when nothing was dismissed: no toast is on screen, or
    /// the user is dragging it and `override_drag` is not set.
    pub fn dismiss_current(&mut self, options: DismissOptions) -> bool {
        self.dismiss_with_reason(options, DismissReason::Explicit)
    }

    /// Presents the next pending toast, or leaves the queue idle.
    ///
    /// Ignored while a toast is on screen or settling. Toasts the surface
    /// fails to show are dropped and the following one is tried.
    pub fn advance(&mut self) {
        if !self.is_idle() {
            tracing::debug!(phase = ?self.phase(), "advance ignored, queue busy");
            return;
        }
        while let Some(toast) = self.pending.pop_front() {
            if self.present(toast) {
                return;
            }
        }
    }

    pub fn dragging_updated(&mut self) {
        if self.current.is_some() {
            self.is_dragging = true;
        }
    }

    pub fn dragging_ended(&mut self, dismissing: bool) {
        self.is_dragging = false;
        let timer_elapsed = self
            .current
            .as_ref()
            .is_some_and(|current| current.timer_elapsed);

        if dismissing || timer_elapsed {
            let reason = if dismissing {
                DismissReason::Dragged
            } else {
                DismissReason::Timeout
            };
            self.dismiss_with_reason(
                DismissOptions {
                    animate: !dismissing,
                    ..DismissOptions::default()
                },
                reason,
            );
        }
    }

    /// Surface completion: the entry animation of `id` is over.
    pub fn entry_finished(&mut self, id: ToastId) {
        match self.current.as_mut() {
            Some(current) if current.toast.id() == id && !current.entered => {
                current.entered = true;
            }
            _ => {
                tracing::debug!(%id, "stale entry completion ignored");
                return;
            }
        }
        self.maybe_start_timer();
    }

    /// The tracked progress of `id` changed.
    pub fn progress_changed(&mut self, id: ToastId) {
        let Some(current) = self.current.as_ref().filter(|c| c.toast.id() == id) else {
            return;
        };
        let status = current.toast.status().unwrap_or(ProgressStatus::InProgress);
        self.surface.content_changed(&current.toast);
        self.record(QueueEventKind::ProgressChanged { id, status });
        self.maybe_start_timer();
    }

    /// Runs the button action of `id`, then dismisses it without animation.
    pub fn trigger_action(&mut self, id: ToastId) {
        let Some(current) = self.current.as_ref().filter(|c| c.toast.id() == id) else {
            return;
        };
        if let Some(button) = current.toast.current_content().button() {
            button.press();
        }
        self.record(QueueEventKind::ActionTriggered { id });
        self.dismiss_with_reason(DismissOptions::without_animation(), DismissReason::Action);
    }

    /// Lets the surface open a presentation it deferred for the keyboard.
    ///
    /// The opened toast counts as entered. If the surface fails, the current
    /// toast is dropped without animation and the backlog moves on.
    pub fn keyboard_hidden(&mut self) {
        match self.surface.keyboard_hidden() {
            Ok(Some(id)) => self.entry_finished(id),
            Ok(None) => {}
            Err(err) => {
                let Some(id) = self.current.as_ref().map(|current| current.toast.id()) else {
                    return;
                };
                tracing::warn!(%id, error = %err, "deferred presentation failed");
                self.record(QueueEventKind::SurfaceFailed {
                    id,
                    message: err.to_string(),
                });
                self.dismiss_with_reason(
                    DismissOptions {
                        override_drag: true,
                        ..DismissOptions::without_animation()
                    },
                    DismissReason::Explicit,
                );
            }
        }
    }

    fn display_time_elapsed(&mut self, id: ToastId) {
        let Some(current) = self.current.as_mut().filter(|c| c.toast.id() == id) else {
            return;
        };
        if current.timer.take().is_none() {
            return;
        }
        current.timer_elapsed = true;

        if self.is_dragging {
            tracing::debug!(%id, "display time elapsed during drag");
            return;
        }
        self.dismiss_with_reason(DismissOptions::default(), DismissReason::Timeout);
    }

    fn settle_elapsed(&mut self, generation: u64) {
        match self.settle {
            Some(settle) if settle.generation == generation => {
                self.settle = None;
                if let Some(toast) = self.staged.take() {
                    self.present(toast);
                } else if settle.move_to_next {
                    self.advance();
                }
            }
            _ => tracing::debug!(generation, "stale settle ignored"),
        }
    }

    fn dismiss_with_reason(&mut self, options: DismissOptions, reason: DismissReason) -> bool {
        if self.is_dragging && !options.override_drag {
            return false;
        }
        let Some(current) = self.current.take() else {
            return false;
        };
        if let Some(timer) = current.timer {
            self.scheduler.cancel(timer);
        }
        self.is_dragging = false;
        self.surface.dismiss(options.animate);

        let id = current.toast.id();
        tracing::debug!(%id, ?reason, move_to_next = options.move_to_next, "toast dismissed");
        self.record(QueueEventKind::Dismissed { id, reason });

        self.settle_generation += 1;
        let generation = self.settle_generation;
        // Nothing can be dismissed while settling, so the delivery is never cancelled.
        self.scheduler.schedule(
            self.settings.settle_delay.as_duration(),
            Message::SettleElapsed(generation),
        );
        self.settle = Some(Settle {
            generation,
            move_to_next: options.move_to_next,
        });
        true
    }

    /// Hands `toast` to the surface. Returns `false` if the surface failed.
    fn present(&mut self, toast: Toast) -> bool {
        let id = toast.id();
        match self.surface.present(&toast, self.settings.toast_height) {
            Ok(presentation) => {
                tracing::debug!(%id, ?presentation, "toast presented");
                self.record(QueueEventKind::Presented { id });
                self.current = Some(Current {
                    toast,
                    entered: false,
                    timer: None,
                    timer_elapsed: false,
                });
                if presentation == Presentation::Shown {
                    self.entry_finished(id);
                }
                true
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "surface could not present toast");
                self.record(QueueEventKind::SurfaceFailed {
                    id,
                    message: err.to_string(),
                });
                false
            }
        }
    }

    fn maybe_start_timer(&mut self) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        if !current.entered
            || current.timer.is_some()
            || current.timer_elapsed
            || !current.toast.wants_timeout()
        {
            return;
        }
        let id = current.toast.id();
        let handle = self.scheduler.schedule(
            current.toast.display_duration().as_duration(),
            Message::DisplayTimeElapsed(id),
        );
        current.timer = Some(handle);
    }

    fn record(&self, kind: QueueEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.record(kind);
        }
    }
}

impl<S, T> Queue<S, T> {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.current, &self.settle) {
            (Some(current), _) if current.entered => Phase::Visible,
            (Some(_), _) => Phase::Presenting,
            (None, Some(_)) => Phase::Settling,
            (None, None) => Phase::Idle,
        }
    }

    /// Returns true when nothing is on screen and no exit animation runs.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.settle.is_none()
    }

    /// The toast on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|current| &current.toast)
    }

    /// Toasts waiting for presentation, in presentation order.
    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.pending.iter()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Returns whether a dismiss timer runs for the current toast.
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.timer.is_some())
    }

    /// Returns whether any toast is on screen, pending, or staged.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some() || self.staged.is_some() || !self.pending.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> QueueSettings {
        self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    /// Returns the surface and scheduler, dropping queue state.
    pub fn into_parts(self) -> (S, T) {
        (self.surface, self.scheduler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::domain::toast::DisplayDuration;
    use crate::error::SurfaceError;
    use crate::notifications::{progress_channel, StateContent, ToastButton, ToastContent};
    use crate::test_utils::{ManualScheduler, RecordingSurface, SurfaceEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    const SETTLE: Duration = Duration::from_millis(500);
    const DISPLAY: Duration = Duration::from_millis(4_500);

    fn new_queue() -> (Queue<RecordingSurface, ManualScheduler>, RecordingSurface) {
        let surface = RecordingSurface::new();
        (Queue::new(surface.clone(), ManualScheduler::new()), surface)
    }

    #[test]
    fn new_queue_is_idle() {
        let (queue, _) = new_queue();
        assert_eq!(queue.phase(), Phase::Idle);
        assert!(queue.current().is_none());
        assert_eq!(queue.pending_count(), 0);
        assert!(!queue.has_notifications());
    }

    #[test]
    fn enqueue_on_idle_queue_presents_immediately() {
        let (mut queue, surface) = new_queue();
        let toast = Toast::message("Tab Closed");
        let id = toast.id();

        queue.enqueue(toast, Placement::Last);

        assert_eq!(surface.presented(), vec![id]);
        assert_eq!(queue.current().map(Toast::id), Some(id));
        assert_eq!(queue.pending_count(), 0);
        assert_eq!(queue.phase(), Phase::Visible);
        assert!(queue.timer_running());
    }

    #[test]
    fn enqueue_while_presenting_waits_in_backlog() {
        let (mut queue, surface) = new_queue();
        let first = Toast::message("a");
        let first_id = first.id();
        queue.enqueue(first, Placement::Last);
        queue.enqueue(Toast::message("b"), Placement::Last);

        assert_eq!(surface.presented(), vec![first_id]);
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn timer_dismisses_and_queue_returns_to_idle() {
        let (mut queue, surface) = new_queue();
        queue.enqueue(Toast::message("a"), Placement::Last);

        queue.advance_clock(DISPLAY - Duration::from_millis(1));
        assert!(queue.current().is_some());

        queue.advance_clock(Duration::from_millis(1));
        assert!(queue.current().is_none());
        assert_eq!(queue.phase(), Phase::Settling);
        assert_eq!(surface.dismissals(), 1);

        queue.advance_clock(SETTLE);
        assert_eq!(queue.phase(), Phase::Idle);
        assert_eq!(queue.scheduler().pending_timers(), 0);
    }

    #[test]
    fn next_toast_waits_for_settle_delay() {
        let (mut queue, surface) = new_queue();
        let first = Toast::message("a");
        let second = Toast::message("b");
        let (first_id, second_id) = (first.id(), second.id());
        queue.enqueue(first, Placement::Last);
        queue.enqueue(second, Placement::Last);

        assert!(queue.dismiss_current(DismissOptions::default()));
        assert_eq!(surface.presented(), vec![first_id]);

        queue.advance_clock(SETTLE);
        assert_eq!(surface.presented(), vec![first_id, second_id]);
    }

    #[test]
    fn first_placement_jumps_the_backlog_but_not_the_screen() {
        let (mut queue, surface) = new_queue();
        let a = Toast::message("a");
        let b = Toast::message("b");
        let c = Toast::message("c");
        let ids = [a.id(), c.id(), b.id()];

        queue.enqueue(a, Placement::Last);
        queue.enqueue(b, Placement::Last);
        queue.enqueue(c, Placement::First);
        assert_eq!(queue.current().map(Toast::id), Some(ids[0]));

        queue.advance_clock(DISPLAY + SETTLE);
        queue.advance_clock(DISPLAY + SETTLE);

        assert_eq!(surface.presented(), ids.to_vec());
    }

    #[test]
    fn dragging_blocks_plain_dismissal() {
        let (mut queue, _) = new_queue();
        queue.enqueue(Toast::message("a"), Placement::Last);
        queue.dragging_updated();

        assert!(!queue.dismiss_current(DismissOptions::default()));
        assert!(queue.current().is_some());

        let forced = DismissOptions {
            override_drag: true,
            ..DismissOptions::default()
        };
        assert!(queue.dismiss_current(forced));
        assert!(queue.current().is_none());
        assert!(!queue.is_dragging());
    }

    #[test]
    fn timer_elapsing_during_drag_dismisses_on_release() {
        let (mut queue, surface) = new_queue();
        queue.enqueue(Toast::message("a"), Placement::Last);
        queue.dragging_updated();

        queue.advance_clock(DISPLAY * 2);
        assert!(queue.current().is_some());

        queue.dragging_ended(false);
        assert!(queue.current().is_none());
        assert_eq!(
            surface.events().last(),
            Some(&SurfaceEvent::Dismissed { animated: true })
        );
    }

    #[test]
    fn short_drag_keeps_toast_and_timer() {
        let (mut queue, _) = new_queue();
        queue.enqueue(Toast::message("a"), Placement::Last);
        queue.dragging_updated();
        queue.dragging_ended(false);

        assert!(queue.current().is_some());
        assert!(queue.timer_running());
        queue.advance_clock(DISPLAY);
        assert!(queue.current().is_none());
    }

    #[test]
    fn drag_past_threshold_dismisses_without_animation() {
        let (mut queue, surface) = new_queue();
        queue.enqueue(Toast::message("a"), Placement::Last);
        queue.dragging_updated();
        queue.dragging_ended(true);

        assert!(queue.current().is_none());
        assert_eq!(
            surface.events().last(),
            Some(&SurfaceEvent::Dismissed { animated: false })
        );
        assert_eq!(queue.scheduler().pending_timers(), 1, "only the settle delay remains");
    }

    #[test]
    fn manual_toast_is_never_auto_dismissed() {
        let (mut queue, _) = new_queue();
        queue.enqueue(Toast::message("a").with_auto_dismiss(false), Placement::Last);
        queue.advance_clock(Duration::from_secs(3_600));

        assert!(queue.current().is_some());
        assert!(!queue.timer_running());
        assert!(queue.dismiss_current(DismissOptions::default()));
    }

    #[test]
    fn zero_display_duration_means_manual_dismissal() {
        let (mut queue, _) = new_queue();
        let toast = Toast::message("a").with_display_duration(DisplayDuration::manual());
        queue.enqueue(toast, Placement::Last);
        queue.advance_clock(Duration::from_secs(120));
        assert!(queue.current().is_some());
    }

    #[test]
    fn custom_display_duration_is_honored() {
        let (mut queue, _) = new_queue();
        let toast = Toast::message("a").with_display_duration(DisplayDuration::from_millis(1_000));
        queue.enqueue(toast, Placement::Last);
        queue.advance_clock(Duration::from_millis(1_000));
        assert!(queue.current().is_none());
    }

    #[test]
    fn clear_and_show_replaces_current_and_backlog() {
        let (mut queue, surface) = new_queue();
        let a = Toast::message("a");
        let a_id = a.id();
        queue.enqueue(a, Placement::Last);
        queue.enqueue(Toast::message("b"), Placement::Last);
        queue.enqueue(Toast::message("c"), Placement::Last);
        queue.dragging_updated();

        let replacement = Toast::message("x");
        let x_id = replacement.id();
        queue.clear_and_show(replacement);

        assert!(queue.current().is_none(), "drag does not protect from replacement");
        assert_eq!(queue.pending_count(), 0);

        queue.advance_clock(SETTLE);
        assert_eq!(surface.presented(), vec![a_id, x_id]);

        queue.advance_clock(DISPLAY + SETTLE);
        assert_eq!(surface.presented(), vec![a_id, x_id]);
        assert_eq!(queue.phase(), Phase::Idle);
    }

    #[test]
    fn clear_and_show_on_idle_queue_presents_at_once() {
        let (mut queue, surface) = new_queue();
        let toast = Toast::message("x");
        let id = toast.id();
        queue.clear_and_show(toast);
        assert_eq!(surface.presented(), vec![id]);
    }

    #[test]
    fn clear_and_show_while_settling_waits_for_settle() {
        let (mut queue, surface) = new_queue();
        queue.enqueue(Toast::message("a"), Placement::Last);
        queue.enqueue(Toast::message("b"), Placement::Last);
        queue.dismiss_current(DismissOptions::default());

        let replacement = Toast::message("x");
        let x_id = replacement.id();
        queue.clear_and_show(replacement);
        assert_eq!(queue.phase(), Phase::Settling);

        queue.advance_clock(SETTLE);
        assert_eq!(surface.presented().last(), Some(&x_id));
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn stale_timer_never_dismisses_the_replacement() {
        let (mut queue, _) = new_queue();
        let a = Toast::message("a");
        let a_id = a.id();
        queue.enqueue(a, Placement::Last);
        queue.clear_and_show(Toast::message("x"));
        queue.advance_clock(SETTLE);

        // A late delivery for the old toast must be ignored.
        queue.handle_message(Message::DisplayTimeElapsed(a_id));
        assert!(queue.current().is_some());
    }

    #[test]
    fn dismiss_without_move_to_next_pauses_backlog() {
        let (mut queue, surface) = new_queue();
        queue.enqueue(Toast::message("a"), Placement::Last);
        let b = Toast::message("b");
        let b_id = b.id();
        queue.enqueue(b, Placement::Last);

        queue.dismiss_current(DismissOptions {
            move_to_next: false,
            ..DismissOptions::default()
        });
        queue.advance_clock(SETTLE);
        assert_eq!(queue.phase(), Phase::Idle);
        assert_eq!(queue.pending_count(), 1);

        queue.advance();
        assert_eq!(surface.presented().last(), Some(&b_id));
    }

    #[test]
    fn animating_surface_delays_timer_until_entry_finished() {
        let (mut queue, surface) = new_queue();
        surface.set_outcome(Ok(Presentation::Animating));
        let toast = Toast::message("a");
        let id = toast.id();
        queue.enqueue(toast, Placement::Last);

        assert_eq!(queue.phase(), Phase::Presenting);
        queue.advance_clock(DISPLAY * 2);
        assert!(queue.current().is_some());

        queue.handle_message(Message::EntryFinished(id));
        assert_eq!(queue.phase(), Phase::Visible);
        queue.advance_clock(DISPLAY);
        assert!(queue.current().is_none());
    }

    #[test]
    fn surface_failure_skips_to_next_toast() {
        let (mut queue, surface) = new_queue();
        let mut collector = DiagnosticsCollector::default();
        queue.set_diagnostics(collector.handle());

        surface.set_outcome(Err(SurfaceError::NoScene));
        queue.enqueue(Toast::message("lost"), Placement::Last);
        assert_eq!(queue.phase(), Phase::Idle);
        assert_eq!(queue.pending_count(), 0);

        surface.set_outcome(Ok(Presentation::Shown));
        let toast = Toast::message("shown");
        let id = toast.id();
        queue.enqueue(toast, Placement::Last);
        assert_eq!(queue.current().map(Toast::id), Some(id));

        let failures = collector
            .collected_kinds()
            .into_iter()
            .filter(|kind| matches!(kind, QueueEventKind::SurfaceFailed { .. }))
            .count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn progress_toast_dismisses_after_completion() {
        let (mut queue, surface) = new_queue();
        let (reporter, tracker) = progress_channel();
        let toast = Toast::message("Downloading")
            .with_auto_dismiss(false)
            .with_progress(tracker);
        let id = toast.id();
        queue.enqueue(toast, Placement::First);

        queue.advance_clock(DISPLAY * 3);
        assert!(queue.current().is_some());

        reporter.succeed();
        queue.handle_message(Message::ProgressChanged(id));
        assert!(surface.events().contains(&SurfaceEvent::ContentChanged(id)));
        assert!(queue.timer_running());

        queue.advance_clock(DISPLAY);
        assert!(queue.current().is_none());
    }

    #[test]
    fn failed_progress_is_timed_like_success() {
        let (mut queue, _) = new_queue();
        let (reporter, tracker) = progress_channel();
        let toast = Toast::message("Saving").with_progress(tracker);
        let id = toast.id();
        queue.enqueue(toast, Placement::Last);

        reporter.fail();
        queue.progress_changed(id);
        queue.advance_clock(DISPLAY);
        assert!(queue.current().is_none());
    }

    #[test]
    fn action_runs_once_and_dismisses_without_animation() {
        let (mut queue, surface) = new_queue();
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);
        let content = ToastContent::new(StateContent::text("Tab Closed").with_button(
            ToastButton::with_action("restore", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        ));
        let toast = Toast::new(content);
        let id = toast.id();
        queue.enqueue(toast, Placement::Last);

        queue.trigger_action(id);
        queue.trigger_action(id);

        assert_eq!(presses.load(Ordering::SeqCst), 1);
        assert!(queue.current().is_none());
        assert_eq!(
            surface.events().last(),
            Some(&SurfaceEvent::Dismissed { animated: false })
        );
    }

    #[test]
    fn diagnostics_record_lifecycle_in_order() {
        let (mut queue, _) = new_queue();
        let mut collector = DiagnosticsCollector::default();
        queue.set_diagnostics(collector.handle());

        let toast = Toast::message("a");
        let id = toast.id();
        queue.enqueue(toast, Placement::Last);
        queue.advance_clock(DISPLAY + SETTLE);

        assert_eq!(
            collector.collected_kinds(),
            vec![
                QueueEventKind::Enqueued {
                    id,
                    placement: Placement::Last,
                    pending: 1,
                },
                QueueEventKind::Presented { id },
                QueueEventKind::Dismissed {
                    id,
                    reason: DismissReason::Timeout,
                },
            ]
        );
    }

    #[test]
    fn settings_come_from_config() {
        let config = Config {
            settle_delay_ms: Some(100),
            toast_height: Some(53.0),
            ..Config::default()
        };
        let settings = QueueSettings::from(&config);
        assert_eq!(settings.settle_delay.as_duration(), Duration::from_millis(100));

        let surface = RecordingSurface::new();
        let mut queue = Queue::with_settings(surface.clone(), ManualScheduler::new(), settings);
        queue.enqueue(Toast::message("a"), Placement::Last);
        assert_eq!(surface.last_height(), Some(53.0));
    }

    #[test]
    fn configured_display_duration_applies_to_unset_toasts() {
        let config = Config {
            display_duration_ms: Some(2_000),
            ..Config::default()
        };
        let surface = RecordingSurface::new();
        let mut queue = Queue::with_settings(
            surface.clone(),
            ManualScheduler::new(),
            QueueSettings::from(&config),
        );

        queue.enqueue(Toast::message("a"), Placement::Last);
        assert_eq!(
            queue.current().map(Toast::display_duration),
            Some(DisplayDuration::from_millis(2_000))
        );
        queue.advance_clock(Duration::from_millis(2_000));
        assert_eq!(surface.dismissals(), 1);

        let explicit = Toast::message("b").with_display_duration(DisplayDuration::from_millis(7_000));
        queue.advance_clock(Duration::from_millis(500));
        queue.enqueue(explicit, Placement::Last);
        queue.advance_clock(Duration::from_millis(2_000));
        assert_eq!(surface.dismissals(), 1);
        queue.advance_clock(Duration::from_millis(5_000));
        assert_eq!(surface.dismissals(), 2);
    }
}
