// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The queue never talks to a window system or a timer wheel directly.
//! It goes through these traits so its logic stays independent of any UI
//! framework and can be driven by a virtual clock in tests.
//!
//! # Available Ports
//!
//! - [`surface`]: Displays and removes a toast
//! - [`scheduler`]: Delivers a queue message after a delay, with cancellation
//!
//! # Design Notes
//!
//! - Methods are not `async`; completions come back as queue messages
//! - Implementations must report each entry completion at most once

pub mod scheduler;
pub mod surface;

pub use scheduler::{Scheduler, TimerHandle};
pub use surface::{Presentation, PresentationSurface};
