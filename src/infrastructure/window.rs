// SPDX-License-Identifier: MPL-2.0
//! Overlay window surface.
//!
//! [`WindowManager`] shows each toast in its own transient window pinned above
//! the bottom toolbar. The platform specifics (scene lookup, keyboard state,
//! actually creating and tearing down the window) sit behind [`WindowBackend`].

use crate::application::port::{Presentation, PresentationSurface};
use crate::config::{
    BOTTOM_ALIGN_OFFSET, BOTTOM_TOOLBAR_HEIGHT, SAFE_AREA_PADDING, WINDOW_ANIMATION_MS,
    WINDOW_EXTRA_HEIGHT,
};
use crate::error::SurfaceError;
use crate::notifications::{Toast, ToastId};
use std::time::Duration;

/// Geometry of the scene a window can be attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
    /// Bottom safe-area inset (home indicator).
    pub safe_area_bottom: f32,
}

/// Window rectangle in screen points, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Visual style applied when opening a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStyle {
    pub shadow: bool,
    /// Fade and slide duration for entry and exit.
    pub animation: Duration,
}

/// What a window displays for one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowContent {
    pub id: ToastId,
    pub message: Option<String>,
    pub button: Option<String>,
    pub checkmark: bool,
    /// Icon for the progress state, when the toast tracks an operation.
    pub status_icon: Option<&'static str>,
}

impl WindowContent {
    #[must_use]
    pub fn from_toast(toast: &Toast) -> Self {
        let content = toast.current_content();
        Self {
            id: toast.id(),
            message: content.message().map(str::to_owned),
            button: content.button().map(|button| button.label().to_owned()),
            checkmark: toast.checkmark(),
            status_icon: toast.status().map(|status| status.icon_name()),
        }
    }
}

/// Platform window operations.
pub trait WindowBackend {
    /// Metrics of the active scene, or `None` when no scene is attached.
    fn screen(&self) -> Option<ScreenMetrics>;

    fn keyboard_visible(&self) -> bool;

    /// Creates and shows a window.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Backend`] when the platform refuses the window.
    fn open_window(
        &mut self,
        content: &WindowContent,
        frame: WindowFrame,
        style: WindowStyle,
    ) -> Result<(), SurfaceError>;

    /// Redraws the open window with new content.
    fn refresh(&mut self, _content: &WindowContent) {}

    /// Removes the open window, fading it out over `animation` if given.
    fn close_window(&mut self, animation: Option<Duration>);
}

/// Placement options for toast windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    pub add_shadow: bool,
    /// Hug the bottom edge instead of sitting above the toolbar.
    pub align_to_bottom: bool,
    /// Wait for the software keyboard to hide before opening.
    pub check_keyboard: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            add_shadow: false,
            align_to_bottom: false,
            check_keyboard: true,
        }
    }
}

#[derive(Debug)]
struct Deferred {
    content: WindowContent,
    height: f32,
}

/// [`PresentationSurface`] backed by transient overlay windows.
#[derive(Debug)]
pub struct WindowManager<B> {
    backend: B,
    options: WindowOptions,
    open: Option<ToastId>,
    deferred: Option<Deferred>,
}

impl<B: WindowBackend> WindowManager<B> {
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, WindowOptions::default())
    }

    pub fn with_options(backend: B, options: WindowOptions) -> Self {
        Self {
            backend,
            options,
            open: None,
            deferred: None,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Toast whose window is on screen.
    #[must_use]
    pub fn open_toast(&self) -> Option<ToastId> {
        self.open
    }

    /// Returns true while a presentation waits for the keyboard.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        self.deferred.is_some()
    }

    /// Computes the window rectangle for a toast of `height`.
    #[must_use]
    pub fn frame_for(&self, screen: ScreenMetrics, height: f32) -> WindowFrame {
        let align = self.options.align_to_bottom;
        let top = if align {
            screen.height - height + BOTTOM_ALIGN_OFFSET
        } else {
            screen.height - height
        };
        let bottom_constraint = if align {
            0.0
        } else {
            screen.safe_area_bottom + BOTTOM_TOOLBAR_HEIGHT
        };

        WindowFrame {
            x: 0.0,
            y: top - bottom_constraint - SAFE_AREA_PADDING,
            width: screen.width,
            // Extends under the card so taps do not reach the page behind it.
            height: height + WINDOW_EXTRA_HEIGHT,
        }
    }

    fn style(&self) -> WindowStyle {
        WindowStyle {
            shadow: self.options.add_shadow,
            animation: Duration::from_millis(WINDOW_ANIMATION_MS),
        }
    }

    fn open(
        &mut self,
        content: &WindowContent,
        height: f32,
        screen: ScreenMetrics,
    ) -> Result<(), SurfaceError> {
        let frame = self.frame_for(screen, height);
        let style = self.style();
        self.backend.open_window(content, frame, style)?;
        tracing::debug!(id = %content.id, y = frame.y, height = frame.height, "toast window opened");
        self.open = Some(content.id);
        Ok(())
    }
}

impl<B: WindowBackend> PresentationSurface for WindowManager<B> {
    fn present(&mut self, toast: &Toast, height: f32) -> Result<Presentation, SurfaceError> {
        let screen = self.backend.screen().ok_or(SurfaceError::NoScene)?;
        let content = WindowContent::from_toast(toast);

        if self.options.check_keyboard && self.backend.keyboard_visible() {
            tracing::debug!(id = %content.id, "keyboard visible, window deferred");
            self.deferred = Some(Deferred { content, height });
            return Ok(Presentation::Animating);
        }

        self.open(&content, height, screen)?;
        Ok(Presentation::Shown)
    }

    fn dismiss(&mut self, animate: bool) {
        if self.deferred.take().is_some() {
            return;
        }
        if self.open.take().is_some() {
            let animation = animate.then(|| Duration::from_millis(WINDOW_ANIMATION_MS));
            self.backend.close_window(animation);
        }
    }

    /// Opens the window of a deferred presentation.
    fn keyboard_hidden(&mut self) -> Result<Option<ToastId>, SurfaceError> {
        let Some(deferred) = self.deferred.take() else {
            return Ok(None);
        };
        let screen = self.backend.screen().ok_or(SurfaceError::NoScene)?;
        self.open(&deferred.content, deferred.height, screen)?;
        Ok(Some(deferred.content.id))
    }

    fn content_changed(&mut self, toast: &Toast) {
        let content = WindowContent::from_toast(toast);
        if let Some(deferred) = self.deferred.as_mut() {
            deferred.content = content;
        } else if self.open == Some(toast.id()) {
            self.backend.refresh(&content);
        }
    }
}
