// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast lifecycle tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::notifications::{RejectReason, RemovalReason, ToastId, Variant};

/// A toast lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEvent {
    /// Accepted into the pending queue.
    Admitted { id: ToastId, variant: Variant },
    /// Refused at admission; never entered the store.
    Rejected { variant: Variant, reason: RejectReason },
    /// Moved from the pending queue to the active set.
    Promoted { id: ToastId },
    /// Left the active set.
    Removed { id: ToastId, reason: RemovalReason },
}

/// A lifecycle event with the monotonic time it was recorded at.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: ToastEvent,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: ToastEvent) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: ToastEvent, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// Event as written to a JSON report, relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: ToastEvent,
}

impl SerializableEvent {
    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    #[must_use]
    pub fn new(event: &DiagnosticEvent, started_at: Instant) -> Self {
        Self {
            offset_ms: event
                .timestamp
                .saturating_duration_since(started_at)
                .as_millis() as u64,
            kind: event.kind.clone(),
        }
    }
}
