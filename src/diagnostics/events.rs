// SPDX-License-Identifier: MPL-2.0
//! Queue event types recorded for diagnostics.
//!
//! Each event describes one lifecycle step of a toast: entering the
//! backlog, being presented, leaving the screen, or failing to appear.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::notifications::{Placement, ProgressStatus, ToastId};

/// Why a toast left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// The display duration elapsed.
    Timeout,
    /// The user dragged the toast past the dismiss threshold.
    Dragged,
    /// The user pressed the toast button.
    Action,
    /// A newer toast pre-empted it through `clear_and_show`.
    Replaced,
    /// A caller asked for the dismissal directly.
    Explicit,
}

/// A queue event with the moment it was recorded.
#[derive(Debug, Clone)]
pub struct QueueEvent {
    /// Monotonic timestamp, used for offsets inside a report.
    pub timestamp: Instant,
    pub kind: QueueEventKind,
}

impl QueueEvent {
    #[must_use]
    pub fn new(kind: QueueEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: QueueEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueueEventKind {
    Enqueued {
        id: ToastId,
        placement: Placement,
        /// Backlog length after insertion.
        pending: usize,
    },
    Presented {
        id: ToastId,
    },
    Dismissed {
        id: ToastId,
        reason: DismissReason,
    },
    /// Pending toasts dropped by `clear_and_show`.
    Discarded {
        count: usize,
    },
    SurfaceFailed {
        id: ToastId,
        message: String,
    },
    ActionTriggered {
        id: ToastId,
    },
    ProgressChanged {
        id: ToastId,
        status: ProgressStatus,
    },
}

impl QueueEventKind {
    /// Short snake_case label, used for report summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            QueueEventKind::Enqueued { .. } => "enqueued",
            QueueEventKind::Presented { .. } => "presented",
            QueueEventKind::Dismissed { .. } => "dismissed",
            QueueEventKind::Discarded { .. } => "discarded",
            QueueEventKind::SurfaceFailed { .. } => "surface_failed",
            QueueEventKind::ActionTriggered { .. } => "action_triggered",
            QueueEventKind::ProgressChanged { .. } => "progress_changed",
        }
    }
}
