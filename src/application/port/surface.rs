// SPDX-License-Identifier: MPL-2.0
//! Presentation surface port definition.
//!
//! A surface is whatever actually shows a toast: a transient overlay window,
//! an in-place banner, a console line. The queue only needs to ask it to show
//! one toast and to take it away again.

use crate::error::SurfaceError;
use crate::notifications::{Toast, ToastId};

/// Outcome of a successful [`PresentationSurface::present`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// The entry animation already completed.
    Shown,
    /// The entry animation is running. The surface owner must deliver
    /// `Message::EntryFinished(id)` to the queue exactly once when it ends.
    Animating,
}

/// Port for displaying toasts.
///
/// # Lifecycle
///
/// 1. `present()` is called for one toast at a time
/// 2. The surface reports entry completion (synchronously or by message)
/// 3. `dismiss()` removes the toast; the queue waits its settle delay
///    before presenting anything else
pub trait PresentationSurface {
    /// Displays `toast` at the requested height.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] when nothing can be shown (for example no
    /// window scene is available). The queue abandons that toast.
    fn present(&mut self, toast: &Toast, height: f32) -> Result<Presentation, SurfaceError>;

    /// Removes the toast currently on screen.
    fn dismiss(&mut self, animate: bool);

    /// The tracked progress of the displayed toast changed; redraw its content.
    fn content_changed(&mut self, _toast: &Toast) {}

    /// The software keyboard finished hiding.
    ///
    /// A surface that answered `Presentation::Animating` to wait for the
    /// keyboard opens the toast now and returns its id; the queue treats that
    /// as the end of the entry animation.
    ///
    /// # Errors
    ///
    /// Returns the [`SurfaceError`] if the deferred toast could not be shown.
    fn keyboard_hidden(&mut self) -> Result<Option<ToastId>, SurfaceError> {
        Ok(None)
    }
}

impl<T: PresentationSurface + ?Sized> PresentationSurface for Box<T> {
    fn present(&mut self, toast: &Toast, height: f32) -> Result<Presentation, SurfaceError> {
        (**self).present(toast, height)
    }

    fn dismiss(&mut self, animate: bool) {
        (**self).dismiss(animate);
    }

    fn content_changed(&mut self, toast: &Toast) {
        (**self).content_changed(toast);
    }

    fn keyboard_hidden(&mut self) -> Result<Option<ToastId>, SurfaceError> {
        (**self).keyboard_hidden()
    }
}
