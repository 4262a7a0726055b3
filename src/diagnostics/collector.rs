// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for toast lifecycle events.
//!
//! The collector owns an [`EventLog`]; producers hold cheap
//! [`DiagnosticsHandle`] clones that feed it through a bounded channel.

use std::time::Instant;

use chrono::Utc;
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{BufferCapacity, DiagnosticEvent, EventLog, EventSummary, SerializableEvent, ToastEvent};

/// Handle for sending lifecycle events to the collector.
///
/// Cheap to clone and shareable across threads. Sends never block: events
/// are dropped when the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle event.
    pub fn log(&self, kind: ToastEvent) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

#[derive(Serialize)]
struct Report<'a> {
    /// RFC 3339 wall-clock time the collector was created.
    collection_started_at: &'a str,
    collection_duration_ms: u64,
    summary: EventSummary,
    events: &'a [SerializableEvent],
}

/// Central collector for lifecycle events.
pub struct DiagnosticsCollector {
    log: EventLog,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: String,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            log: EventLog::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now().to_rfc3339(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending channel events into the log.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.log.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.iter()
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Counts stored events by kind.
    #[must_use]
    pub fn summary(&self) -> EventSummary {
        self.log.summary()
    }

    /// Exports stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn export_json(&self) -> crate::error::Result<String> {
        let events: Vec<SerializableEvent> = self
            .log
            .iter()
            .map(|event| SerializableEvent::new(event, self.collection_started_at))
            .collect();
        let report = Report {
            collection_started_at: &self.collection_started_at_utc,
            collection_duration_ms: self.collection_started_at.elapsed().as_millis() as u64,
            summary: self.summary(),
            events: &events,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
