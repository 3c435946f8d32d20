// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks the vertical swipe a user performs on a toast and decides whether
//! the gesture dismisses it. The queue only consumes the final yes/no through
//! `Queue::dragging_ended`; the numbers here are a presentation default.

use crate::config::{DRAG_FADE_THRESHOLD, TOAST_CARD_HEIGHT};

/// How the drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// The toast should be dismissed.
    pub dismissing: bool,
}

/// Manages swipe-to-dismiss state for the toast on screen
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Vertical position where the drag started
    pub start_y: Option<f32>,

    /// Current vertical offset of the toast
    pub offset: f32,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, y: f32) {
        self.is_dragging = true;
        self.start_y = Some(y);
        self.offset = 0.0;
    }

    /// Updates the offset from the current pointer position.
    ///
    /// Returns the new offset, or `None` when no drag is active.
    pub fn update(&mut self, y: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let start = self.start_y?;
        self.offset = y - start;
        Some(self.offset)
    }

    /// Ends the drag.
    ///
    /// `predicted_end` is the offset the gesture would reach with its current
    /// velocity. A fling beyond one and a half card heights, or a drag beyond
    /// one card height, dismisses the toast; otherwise it snaps back.
    pub fn finish(&mut self, predicted_end: f32) -> DragOutcome {
        let dismissing = if predicted_end.abs() > TOAST_CARD_HEIGHT * 1.5 {
            self.offset = predicted_end;
            true
        } else if self.offset.abs() > TOAST_CARD_HEIGHT {
            true
        } else {
            self.offset = 0.0;
            false
        };
        self.is_dragging = false;
        self.start_y = None;
        DragOutcome { dismissing }
    }

    /// Opacity for the current offset: fully opaque within the fade
    /// threshold, then fading out over three more thresholds.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let delta = self.offset.abs() - DRAG_FADE_THRESHOLD;
        if delta > 0.0 {
            (1.0 - delta / (DRAG_FADE_THRESHOLD * 3.0)).max(0.0)
        } else {
            1.0
        }
    }
}
