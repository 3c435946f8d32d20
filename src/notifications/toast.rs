// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`Toast`] is what callers enqueue: content for each progress state,
//! timing configuration, and an optional progress tracker. The queue only
//! observes it; nothing here is mutated once the toast is enqueued.

use super::progress::{ProgressStatus, ProgressTracker};
use crate::domain::toast::DisplayDuration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates a fresh, process-unique id.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw value. Only meant for deserialized data and tests.
    #[must_use]
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Where an enqueued toast lands in the backlog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Ahead of every pending toast, behind the one on screen.
    First,
    #[default]
    Last,
}

/// Callback run when the toast button is pressed.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Labelled button shown on the right of the toast text.
#[derive(Clone)]
pub struct ToastButton {
    label: String,
    action: Option<Action>,
}

impl ToastButton {
    /// A button that only dismisses the toast.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }

    pub fn with_action(label: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            action: Some(Arc::new(action)),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the action, if there is one.
    pub fn press(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }
}

impl fmt::Debug for ToastButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastButton")
            .field("label", &self.label)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Text and button shown for one progress state.
#[derive(Debug, Clone, Default)]
pub struct StateContent {
    text: Option<String>,
    button: Option<ToastButton>,
}

impl StateContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            button: None,
        }
    }

    #[must_use]
    pub fn with_button(mut self, button: ToastButton) -> Self {
        self.button = Some(button);
        self
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn button(&self) -> Option<&ToastButton> {
        self.button.as_ref()
    }
}

/// Content for every state a toast can display.
#[derive(Debug, Clone)]
pub struct ToastContent {
    normal: StateContent,
    completed: Option<StateContent>,
    failed: Option<StateContent>,
}

impl ToastContent {
    #[must_use]
    pub fn new(normal: StateContent) -> Self {
        Self {
            normal,
            completed: None,
            failed: None,
        }
    }

    #[must_use]
    pub fn with_completed(mut self, completed: StateContent) -> Self {
        self.completed = Some(completed);
        self
    }

    #[must_use]
    pub fn with_failed(mut self, failed: StateContent) -> Self {
        self.failed = Some(failed);
        self
    }

    /// Content to display for `status`, falling back to the normal content
    /// when no dedicated variant exists.
    #[must_use]
    pub fn content_for(&self, status: ProgressStatus) -> &StateContent {
        let specific = match status {
            ProgressStatus::InProgress => None,
            ProgressStatus::Success => self.completed.as_ref(),
            ProgressStatus::Failed => self.failed.as_ref(),
        };
        specific.unwrap_or(&self.normal)
    }
}

/// A transient notification to present.
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    content: ToastContent,
    /// `None` until set explicitly or by the queue's configured default.
    display_duration: Option<DisplayDuration>,
    auto_dismiss: bool,
    checkmark: bool,
    progress: Option<ProgressTracker>,
}

impl Toast {
    #[must_use]
    pub fn new(content: ToastContent) -> Self {
        Self {
            id: ToastId::new(),
            content,
            display_duration: None,
            auto_dismiss: true,
            checkmark: false,
            progress: None,
        }
    }

    /// Plain text toast with default timing.
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(ToastContent::new(StateContent::text(text)))
    }

    #[must_use]
    pub fn with_display_duration(mut self, duration: DisplayDuration) -> Self {
        self.display_duration = Some(duration);
        self
    }

    /// Gives the toast `duration` unless one was set explicitly.
    pub(crate) fn apply_default_duration(&mut self, duration: DisplayDuration) {
        self.display_duration.get_or_insert(duration);
    }

    /// Whether the dismiss timer runs for this toast.
    ///
    /// Ignored for progress toasts, whose timer starts once the tracked
    /// operation finishes.
    #[must_use]
    pub fn with_auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    #[must_use]
    pub fn with_checkmark(mut self, checkmark: bool) -> Self {
        self.checkmark = checkmark;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, tracker: ProgressTracker) -> Self {
        self.progress = Some(tracker);
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.display_duration.unwrap_or_default()
    }

    #[must_use]
    pub fn auto_dismiss(&self) -> bool {
        self.auto_dismiss
    }

    #[must_use]
    pub fn checkmark(&self) -> bool {
        self.checkmark
    }

    #[must_use]
    pub fn progress(&self) -> Option<&ProgressTracker> {
        self.progress.as_ref()
    }

    /// Current progress status, `None` for toasts that track nothing.
    #[must_use]
    pub fn status(&self) -> Option<ProgressStatus> {
        self.progress.as_ref().map(ProgressTracker::status)
    }

    /// Content matching the current progress status.
    #[must_use]
    pub fn current_content(&self) -> &StateContent {
        self.content
            .content_for(self.status().unwrap_or_default())
    }

    /// Returns whether a dismiss timer may run right now.
    #[must_use]
    pub fn wants_timeout(&self) -> bool {
        if self.display_duration().is_manual() {
            return false;
        }
        match self.status() {
            Some(status) => status.is_finished(),
            None => self.auto_dismiss,
        }
    }
}
