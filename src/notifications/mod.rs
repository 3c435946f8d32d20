// SPDX-License-Identifier: MPL-2.0
//! Queued toast notification system.
//!
//! Toasts are short, non-blocking messages ("Tab Closed", "Downloaded") shown
//! one at a time above the browser chrome. Callers enqueue them; the queue
//! presents each through a [`PresentationSurface`], dismisses it when its
//! display time elapses or the user swipes it away, and moves on.
//!
//! # Components
//!
//! - [`toast`] - `Toast` with per-state content, timing and progress tracking
//! - [`progress`] - Progress reporter/tracker pair for background operations
//! - [`queue`] - `Queue` for ordering and lifecycle management
//! - [`drag`] - Swipe-to-dismiss gesture state
//! - [`presets`] - Ready-made toasts for common browser actions
//!
//! # Usage
//!
//! ```
//! use toast_queue::notifications::{Placement, Queue, Toast};
//! use toast_queue::test_utils::{ManualScheduler, RecordingSurface};
//!
//! let surface = RecordingSurface::new();
//! let mut queue = Queue::new(surface.clone(), ManualScheduler::new());
//!
//! queue.enqueue(Toast::message("Tab Closed"), Placement::Last);
//! assert_eq!(surface.presented().len(), 1);
//! ```
//!
//! # Design Considerations
//!
//! - One toast on screen at a time; the rest wait in FIFO order
//! - `Placement::First` jumps the backlog, never the toast on screen
//! - Display time: 4.5s by default, manual dismissal when zero
//!
//! [`PresentationSurface`]: crate::application::port::PresentationSurface

pub mod drag;
pub mod presets;
pub mod progress;
pub mod queue;
pub mod toast;

pub use drag::{DragOutcome, DragState};
pub use progress::{
    progress_channel, ProgressReporter, ProgressSnapshot, ProgressStatus, ProgressTracker,
};
pub use queue::{DismissOptions, Message, Phase, Queue, QueueSettings};
pub use toast::{Action, Placement, StateContent, Toast, ToastButton, ToastContent, ToastId};
