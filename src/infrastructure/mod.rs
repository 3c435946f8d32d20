// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`window`]: Overlay windows (implements [`PresentationSurface`])
//! - [`runtime`]: Tokio timers (implements [`Scheduler`]) and the queue service
//!
//! [`PresentationSurface`]: crate::application::port::PresentationSurface
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod runtime;
pub mod window;

pub use runtime::{TokioScheduler, ToastHandle, ToastService};
pub use window::{
    ScreenMetrics, WindowBackend, WindowContent, WindowFrame, WindowManager, WindowOptions,
    WindowStyle,
};
