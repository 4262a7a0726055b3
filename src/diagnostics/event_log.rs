// SPDX-License-Identifier: MPL-2.0
//! Bounded store for lifecycle events.
//!
//! Keeps the most recent events and a running tally per event kind, so the
//! summary stays in step with what is stored without rescanning it.

use std::collections::VecDeque;

use serde::Serialize;

pub use crate::domain::diagnostics::BufferCapacity;

use super::{DiagnosticEvent, ToastEvent};

/// Per-kind event tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub admitted: usize,
    pub rejected: usize,
    pub promoted: usize,
    pub removed: usize,
}

impl EventSummary {
    fn slot(&mut self, kind: &ToastEvent) -> &mut usize {
        match kind {
            ToastEvent::Admitted { .. } => &mut self.admitted,
            ToastEvent::Rejected { .. } => &mut self.rejected,
            ToastEvent::Promoted { .. } => &mut self.promoted,
            ToastEvent::Removed { .. } => &mut self.removed,
        }
    }

    /// Total number of events counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.admitted + self.rejected + self.promoted + self.removed
    }
}

/// Most recent lifecycle events, oldest first.
///
/// # Example
///
/// ```
/// use toastkit::diagnostics::{BufferCapacity, DiagnosticEvent, EventLog, ToastEvent};
/// use toastkit::notifications::ToastId;
///
/// let mut log = EventLog::new(BufferCapacity::default());
/// log.push(DiagnosticEvent::new(ToastEvent::Promoted { id: ToastId::from("a") }));
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.summary().promoted, 1);
/// ```
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<DiagnosticEvent>,
    capacity: BufferCapacity,
    summary: EventSummary,
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity,
            summary: EventSummary::default(),
        }
    }

    /// Appends an event. When full, the oldest event is evicted and returned.
    pub fn push(&mut self, event: DiagnosticEvent) -> Option<DiagnosticEvent> {
        let evicted = if self.events.len() >= self.capacity.value() {
            self.events.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            let count = self.summary.slot(&old.kind);
            *count = count.saturating_sub(1);
        }
        *self.summary.slot(&event.kind) += 1;
        self.events.push_back(event);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Tallies of the stored events.
    #[must_use]
    pub fn summary(&self) -> EventSummary {
        self.summary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.summary = EventSummary::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{RemovalReason, ToastId, Variant};

    fn admitted(id: &str) -> DiagnosticEvent {
        DiagnosticEvent::new(ToastEvent::Admitted {
            id: ToastId::from(id),
            variant: Variant::Info,
        })
    }

    fn removed(id: &str) -> DiagnosticEvent {
        DiagnosticEvent::new(ToastEvent::Removed {
            id: ToastId::from(id),
            reason: RemovalReason::Expired,
        })
    }

    #[test]
    fn eviction_keeps_summary_in_step() {
        let capacity = BufferCapacity::new(0);
        let mut log = EventLog::new(capacity);
        for i in 0..capacity.value() {
            log.push(admitted(&i.to_string()));
        }
        assert_eq!(log.summary().admitted, capacity.value());

        let evicted = log.push(removed("0"));
        assert!(matches!(
            evicted.map(|e| e.kind),
            Some(ToastEvent::Admitted { .. })
        ));
        assert_eq!(log.len(), capacity.value());
        assert_eq!(log.summary().admitted, capacity.value() - 1);
        assert_eq!(log.summary().removed, 1);
        assert_eq!(log.summary().total(), log.len());
    }

    #[test]
    fn push_below_capacity_evicts_nothing() {
        let mut log = EventLog::new(BufferCapacity::default());
        assert!(log.push(admitted("a")).is_none());
        assert!(log.push(removed("a")).is_none());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn clear_resets_events_and_summary() {
        let mut log = EventLog::new(BufferCapacity::default());
        log.push(admitted("a"));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.summary(), EventSummary::default());
    }
}
