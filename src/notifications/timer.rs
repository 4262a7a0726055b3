// SPDX-License-Identifier: MPL-2.0
//! Cancellable auto-dismiss timers.

use tokio::task::AbortHandle;

/// Cancellation handle for a toast's auto-dismiss task.
///
/// Dropping the handle aborts the task, so removing a toast from the active
/// set is enough to cancel its pending timer.
#[derive(Debug)]
pub struct TimerHandle {
    abort: Option<AbortHandle>,
}

impl TimerHandle {
    #[must_use]
    pub fn new(abort: AbortHandle) -> Self {
        Self { abort: Some(abort) }
    }

    /// Releases the task without aborting it.
    ///
    /// Used by the timer task itself when it fires.
    pub fn disarm(mut self) {
        self.abort = None;
    }

    /// The task this handle cancels.
    #[cfg(test)]
    pub(crate) fn task(&self) -> Option<AbortHandle> {
        self.abort.clone()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}
