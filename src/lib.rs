// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` presents short-lived browser notifications one at a time.
//!
//! Callers enqueue toasts; the queue shows each on a presentation surface,
//! dismisses it on timeout, swipe or button press, waits for the exit
//! animation to settle and moves on to the next one.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod notifications;
pub mod test_utils;
