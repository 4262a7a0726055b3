// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast scheduler.
//!
//! Lifecycle transitions (admission, rejection, promotion, removal) are
//! captured in a memory-bounded event log and can be exported as a JSON
//! report.
//!
//! - [`EventLog`]: Most recent events plus running per-kind tallies
//! - [`ToastEvent`]: Lifecycle transition recorded by the manager
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Sink and its cloneable sender

mod collector;
mod event_log;
mod events;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use event_log::{BufferCapacity, EventLog, EventSummary};
pub use events::{DiagnosticEvent, SerializableEvent, ToastEvent};
