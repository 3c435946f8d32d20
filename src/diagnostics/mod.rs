// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification queue.
//!
//! The queue reports every lifecycle step (enqueue, presentation, dismissal,
//! surface failures) to a memory-bounded circular buffer so a host can export
//! what happened as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`QueueEvent`]: Timestamped queue lifecycle event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Collector and the cheap
//!   non-blocking handle the queue writes through

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DismissReason, QueueEvent, QueueEventKind};
pub use report::{QueueReport, SerializableEvent};
