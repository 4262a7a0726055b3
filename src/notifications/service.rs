// SPDX-License-Identifier: MPL-2.0
//! Async front-end for the toast manager.
//!
//! `ToastService` shares one [`Manager`] behind a mutex and arms a tokio
//! timer for every toast that becomes active. The timer's handle lives on the
//! active entry, so an early dismissal or swipe cancels it.

use super::manager::{Manager, RemovalReason, Snapshot};
use super::notification::{ToastId, ToastOptions};
use super::timer::TimerHandle;
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Cloneable handle to a shared, timer-driven toast manager.
#[derive(Clone)]
pub struct ToastService {
    shared: Arc<Mutex<Manager>>,
    runtime: Handle,
}

impl std::fmt::Debug for ToastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastService").finish_non_exhaustive()
    }
}

impl ToastService {
    /// Wraps a manager, capturing the current tokio runtime for timers.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn new(manager: Manager) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;
        Ok(Self::with_runtime(manager, runtime))
    }

    /// Wraps a manager, spawning timers on the given runtime.
    #[must_use]
    pub fn with_runtime(manager: Manager, runtime: Handle) -> Self {
        Self {
            shared: Arc::new(Mutex::new(manager)),
            runtime,
        }
    }

    /// Submits a toast. Returns its id, or `None` if it was rejected.
    pub fn submit(&self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        let mut manager = self.shared.lock();
        let submission = manager.submit_detailed(message, options);
        arm(&self.shared, &self.runtime, &mut manager, &submission.promoted);
        submission.admission.into_id()
    }

    /// Dismisses an active toast, cancelling its timer.
    pub fn dismiss(&self, id: &ToastId) -> bool {
        self.remove(id, RemovalReason::Dismissed)
    }

    /// Handles a swipe gesture. Ignored for toasts that are not swipeable.
    pub fn swipe(&self, id: &ToastId) -> bool {
        let mut manager = self.shared.lock();
        match manager.swipe_detailed(id) {
            Some(removal) => {
                arm(&self.shared, &self.runtime, &mut manager, &removal.promoted);
                true
            }
            None => false,
        }
    }

    /// Clears every toast and cancels all timers.
    pub fn clear(&self) {
        self.shared.lock().clear();
    }

    /// Subscribes to snapshots of the active set.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.lock().subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().snapshot()
    }

    /// Runs a read-only closure against the manager.
    pub fn with_manager<R>(&self, f: impl FnOnce(&Manager) -> R) -> R {
        f(&self.shared.lock())
    }

    fn remove(&self, id: &ToastId, reason: RemovalReason) -> bool {
        let mut manager = self.shared.lock();
        match manager.remove(id, reason) {
            Some(removal) => {
                arm(&self.shared, &self.runtime, &mut manager, &removal.promoted);
                true
            }
            None => false,
        }
    }
}

/// Spawns an auto-dismiss timer for each newly active toast.
fn arm(shared: &Arc<Mutex<Manager>>, runtime: &Handle, manager: &mut Manager, ids: &[ToastId]) {
    for id in ids {
        let Some(delay) = manager.auto_dismiss_delay(id) else {
            continue;
        };
        let weak = Arc::downgrade(shared);
        let timer_runtime = runtime.clone();
        let timer_id = id.clone();
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            expire(&weak, &timer_runtime, &timer_id);
        });
        manager.attach_timer(id, TimerHandle::new(task.abort_handle()));
    }
}

fn expire(weak: &Weak<Mutex<Manager>>, runtime: &Handle, id: &ToastId) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let mut manager = shared.lock();
    if let Some(mut removal) = manager.remove(id, RemovalReason::Expired) {
        // This task is the timer; releasing the handle must not abort it.
        if let Some(timer) = removal.toast.take_timer() {
            timer.disarm();
        }
        arm(&shared, runtime, &mut manager, &removal.promoted);
    }
}
