// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the pending queue and the active set, applies the
//! admission policy, and drains the queue whenever capacity frees up. It is
//! an explicit context object: build one per application and hand it (or a
//! [`ToastService`](super::ToastService) wrapping it) to whoever needs it.

use super::admission::{self, Admission};
use super::notification::{Toast, ToastId, ToastOptions};
use super::store::{ActiveToast, Store};
use super::timer::TimerHandle;
use crate::config::ToastConfig;
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Messages for toast state changes, for hosts with a message loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// The user swiped a toast away.
    Swipe(ToastId),
    /// Periodic tick for checking auto-dismiss deadlines.
    Tick,
}

/// Why a toast left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// Programmatic dismissal.
    Dismissed,
    /// Swipe-to-dismiss gesture.
    Swiped,
    /// Display duration elapsed.
    Expired,
    /// The whole stack was cleared.
    Cleared,
}

/// Render-facing view of the scheduler, pushed on every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Active toasts in promotion order.
    pub active: Vec<Toast>,
    /// Number of toasts waiting for a slot.
    pub pending: usize,
}

impl Snapshot {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty() && self.pending == 0
    }
}

/// Result of [`Manager::submit_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub admission: Admission,
    /// Toasts that became active as a consequence, oldest first.
    pub promoted: Vec<ToastId>,
}

/// Result of a successful [`Manager::remove`].
#[derive(Debug)]
pub struct Removal {
    pub toast: ActiveToast,
    /// Toasts promoted into the freed capacity, oldest first.
    pub promoted: Vec<ToastId>,
}

/// Manages the pending queue and visible toasts.
#[derive(Debug)]
pub struct Manager {
    config: ToastConfig,
    store: Store,
    diagnostics: Option<DiagnosticsHandle>,
    snapshot_tx: watch::Sender<Snapshot>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl Manager {
    /// Creates an empty manager using the given provider defaults.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::default());
        Self {
            config,
            store: Store::new(),
            diagnostics: None,
            snapshot_tx,
        }
    }

    /// Sets the diagnostics handle for recording lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Replaces the provider defaults and drains into any new capacity.
    pub fn set_config(&mut self, config: ToastConfig) -> Vec<ToastId> {
        self.config = config;
        let promoted = self.drain(Instant::now());
        self.publish();
        promoted
    }

    /// Submits a toast. Returns its id, or `None` if it was rejected.
    pub fn submit(&mut self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        self.submit_detailed(message, options).admission.into_id()
    }

    /// Submits a toast and reports which toasts became active.
    pub fn submit_detailed(
        &mut self,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Submission {
        let now = Instant::now();
        let variant = options.variant.unwrap_or_default();

        if let Err(reason) = admission::check(
            &options,
            &self.config,
            self.store.active_len(),
            self.store.pending_len(),
        ) {
            tracing::debug!(?variant, ?reason, "toast rejected");
            self.report(ToastEvent::Rejected { variant, reason });
            return Submission {
                admission: Admission::Rejected(reason),
                promoted: Vec::new(),
            };
        }

        let id = ToastId::generate();
        let toast = Toast::resolve(id.clone(), message.into(), options, &self.config);
        tracing::debug!(id = %id, ?variant, "toast admitted");
        self.report(ToastEvent::Admitted {
            id: id.clone(),
            variant,
        });
        self.store.enqueue(toast);

        let promoted = self.drain(now);
        self.publish();
        Submission {
            admission: Admission::Admitted(id),
            promoted,
        }
    }

    /// Dismisses an active toast. Returns `true` if it was showing.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        self.remove(id, RemovalReason::Dismissed).is_some()
    }

    /// Handles a swipe gesture. Ignored for toasts that are not swipeable.
    pub fn swipe(&mut self, id: &ToastId) -> bool {
        self.swipe_detailed(id).is_some()
    }

    /// Handles a swipe gesture and reports which toasts were backfilled.
    pub fn swipe_detailed(&mut self, id: &ToastId) -> Option<Removal> {
        let swipeable = self
            .store
            .get(id)
            .is_some_and(|active| active.toast().is_swipeable());
        if !swipeable {
            return None;
        }
        self.remove(id, RemovalReason::Swiped)
    }

    /// Removes an active toast and backfills from the pending queue.
    ///
    /// Ids that are not active (already removed, still pending, or unknown)
    /// are a no-op.
    pub fn remove(&mut self, id: &ToastId, reason: RemovalReason) -> Option<Removal> {
        let toast = self.store.remove(id)?;
        tracing::debug!(id = %id, ?reason, "toast removed");
        self.report(ToastEvent::Removed {
            id: id.clone(),
            reason,
        });
        let promoted = self.drain(Instant::now());
        self.publish();
        Some(Removal { toast, promoted })
    }

    /// Expires every active toast whose display duration elapsed at `now`.
    ///
    /// For hosts that drive auto-dismiss from a periodic tick rather than
    /// per-toast timers. Backfilled toasts start their clock at `now`.
    pub fn tick_at(&mut self, now: Instant) -> Vec<ToastId> {
        let expired: Vec<ToastId> = self
            .store
            .active()
            .filter(|active| active.is_expired_at(now))
            .map(|active| active.toast().id().clone())
            .collect();

        if expired.is_empty() {
            return expired;
        }
        for id in &expired {
            if self.store.remove(id).is_some() {
                tracing::debug!(id = %id, "toast expired");
                self.report(ToastEvent::Removed {
                    id: id.clone(),
                    reason: RemovalReason::Expired,
                });
            }
        }
        self.drain(now);
        self.publish();
        expired
    }

    /// Processes a tick at the current time.
    pub fn tick(&mut self) -> Vec<ToastId> {
        self.tick_at(Instant::now())
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Swipe(id) => {
                self.swipe(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Clears all toasts (active and pending). Timers are cancelled.
    pub fn clear(&mut self) {
        for active in self.store.clear() {
            self.report(ToastEvent::Removed {
                id: active.toast().id().clone(),
                reason: RemovalReason::Cleared,
            });
        }
        self.publish();
    }

    /// Attaches an auto-dismiss timer to an active toast.
    pub fn attach_timer(&mut self, id: &ToastId, timer: TimerHandle) -> bool {
        self.store.attach_timer(id, timer)
    }

    /// Display duration of an active toast, `None` if persistent or inactive.
    #[must_use]
    pub fn auto_dismiss_delay(&self, id: &ToastId) -> Option<Duration> {
        self.store
            .get(id)
            .and_then(|active| active.toast().duration().as_duration())
    }

    /// Subscribes to snapshots. The receiver sees the current state
    /// immediately and every mutation afterwards.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active: self.store.active().map(|a| a.toast().clone()).collect(),
            pending: self.store.pending_len(),
        }
    }

    /// Currently visible toasts, in promotion order.
    pub fn active(&self) -> impl Iterator<Item = &ActiveToast> {
        self.store.active()
    }

    /// Queued toasts, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.store.pending()
    }

    #[must_use]
    pub fn is_active(&self, id: &ToastId) -> bool {
        self.store.get(id).is_some()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.store.active_len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.store.pending_len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.store.active_len() > 0 || self.store.pending_len() > 0
    }

    /// Promotes pending toasts, oldest first, while capacity allows.
    ///
    /// The cap comes from the head's own override when it has one, so a
    /// head that wants fewer slots blocks everything behind it.
    fn drain(&mut self, now: Instant) -> Vec<ToastId> {
        let mut promoted = Vec::new();
        while let Some(head) = self.store.head() {
            let cap = head
                .max_concurrent_override()
                .unwrap_or_else(|| self.config.max_concurrent())
                .value();
            if self.store.active_len() >= cap {
                break;
            }
            let Some(id) = self.store.promote(now) else {
                break;
            };
            tracing::debug!(id = %id, active = self.store.active_len(), "toast promoted");
            self.report(ToastEvent::Promoted { id: id.clone() });
            promoted.push(id);
        }
        promoted
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.snapshot());
    }

    fn report(&self, event: ToastEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}
