// SPDX-License-Identifier: MPL-2.0
//! Serializable snapshot of the recorded queue events.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::events::QueueEventKind;

/// An event with its timestamp expressed relative to collection start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: QueueEventKind,
}

impl SerializableEvent {
    #[must_use]
    pub fn new(event_timestamp: Instant, collection_start: Instant, kind: QueueEventKind) -> Self {
        let elapsed = event_timestamp.saturating_duration_since(collection_start);
        Self {
            timestamp_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            kind,
        }
    }
}

/// Exported diagnostics: when collection began, what happened, and counts per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueReport {
    pub collection_started_at: DateTime<Utc>,
    pub event_count: usize,
    pub counts: BTreeMap<String, usize>,
    pub events: Vec<SerializableEvent>,
}

impl QueueReport {
    #[must_use]
    pub fn new(collection_started_at: DateTime<Utc>, events: Vec<SerializableEvent>) -> Self {
        let mut counts = BTreeMap::new();
        for event in &events {
            *counts.entry(event.kind.label().to_string()).or_insert(0) += 1;
        }
        Self {
            collection_started_at,
            event_count: events.len(),
            counts,
            events,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
