// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating queue events.
//!
//! The queue holds a [`DiagnosticsHandle`] and sends events without blocking;
//! the collector drains them into a bounded buffer on demand.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::report::{QueueReport, SerializableEvent};
use super::{BufferCapacity, CircularBuffer, QueueEvent, QueueEventKind};

/// Room for events recorded between two drains.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending queue events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<QueueEvent>,
}

impl DiagnosticsHandle {
    /// Records an event, dropping it if the channel is full.
    pub fn record(&self, kind: QueueEventKind) {
        let _ = self.event_tx.try_send(QueueEvent::new(kind));
    }

    /// Records an event and reports whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_record(&self, kind: QueueEventKind) -> Result<(), TrySendError<QueueEvent>> {
        self.event_tx.try_send(QueueEvent::new(kind))
    }
}

/// Central store for queue events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<QueueEvent>,
    event_rx: Receiver<QueueEvent>,
    event_tx: Sender<QueueEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn record(&mut self, kind: QueueEventKind) {
        self.buffer.push(QueueEvent::new(kind));
    }

    pub fn events(&self) -> impl Iterator<Item = &QueueEvent> {
        self.buffer.iter()
    }

    /// Event kinds in arrival order, after draining the channel.
    pub fn collected_kinds(&mut self) -> Vec<QueueEventKind> {
        self.process_pending();
        self.buffer.iter().map(|event| event.kind.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds a report from everything collected so far.
    pub fn build_report(&mut self) -> QueueReport {
        self.process_pending();
        let events = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        QueueReport::new(self.collection_started_at_utc, events)
    }

    /// Builds a report and renders it as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&mut self) -> crate::error::Result<String> {
        Ok(self.build_report().to_json()?)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}
