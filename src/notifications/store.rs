// SPDX-License-Identifier: MPL-2.0
//! Pending queue and active set.
//!
//! The store only moves toasts around; admission and capacity decisions
//! belong to the manager.

use super::notification::{Toast, ToastId};
use super::timer::TimerHandle;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A toast currently on screen.
#[derive(Debug)]
pub struct ActiveToast {
    toast: Toast,
    shown_at: Instant,
    timer: Option<TimerHandle>,
}

impl ActiveToast {
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Whether an auto-dismiss timer is attached.
    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    #[cfg(test)]
    pub(crate) fn timer_task(&self) -> Option<tokio::task::AbortHandle> {
        self.timer.as_ref().and_then(TimerHandle::task)
    }

    /// Detaches the timer handle, if any.
    pub fn take_timer(&mut self) -> Option<TimerHandle> {
        self.timer.take()
    }

    /// Returns whether the display duration has elapsed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.toast
            .duration()
            .as_duration()
            .is_some_and(|d| now.saturating_duration_since(self.shown_at) >= d)
    }

    /// Time left before auto-dismiss, `None` for persistent toasts.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        let total = self.toast.duration().as_duration()?;
        Some(total.saturating_sub(now.saturating_duration_since(self.shown_at)))
    }

    pub fn into_toast(self) -> Toast {
        let Self { toast, .. } = self;
        toast
    }
}

/// FIFO pending queue plus the bounded active set.
#[derive(Debug, Default)]
pub struct Store {
    pending: VecDeque<Toast>,
    active: Vec<ActiveToast>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the tail of the pending queue.
    pub fn enqueue(&mut self, toast: Toast) {
        self.pending.push_back(toast);
    }

    /// Moves the head of the pending queue into the active set.
    ///
    /// The caller is responsible for checking capacity.
    pub fn promote(&mut self, now: Instant) -> Option<ToastId> {
        let toast = self.pending.pop_front()?;
        let id = toast.id().clone();
        self.active.push(ActiveToast {
            toast,
            shown_at: now,
            timer: None,
        });
        Some(id)
    }

    /// Removes an active toast. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ToastId) -> Option<ActiveToast> {
        let pos = self.active.iter().position(|a| a.toast.id() == id)?;
        Some(self.active.remove(pos))
    }

    /// Stores a timer handle alongside an active toast.
    ///
    /// If the toast is no longer active the handle is dropped, which
    /// cancels the timer.
    pub fn attach_timer(&mut self, id: &ToastId, timer: TimerHandle) -> bool {
        match self.active.iter_mut().find(|a| a.toast.id() == id) {
            Some(active) => {
                active.timer = Some(timer);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn head(&self) -> Option<&Toast> {
        self.pending.front()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ActiveToast> {
        self.active.iter().find(|a| a.toast.id() == id)
    }

    /// Active toasts in promotion order.
    pub fn active(&self) -> impl Iterator<Item = &ActiveToast> {
        self.active.iter()
    }

    /// Pending toasts, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.pending.iter()
    }

    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Empties both containers, returning the removed active toasts.
    pub fn clear(&mut self) -> Vec<ActiveToast> {
        self.pending.clear();
        std::mem::take(&mut self.active)
    }
}
