// SPDX-License-Identifier: MPL-2.0
//! `toastkit` is the behavioral core of a UI component kit.
//!
//! Its centerpiece is a toast notification scheduler: an admission policy,
//! a FIFO queue of pending toasts, a capped set of active toasts, and
//! auto-dismiss timers that promote queued toasts as slots free up. Smaller
//! utilities cover class-name merging, input masks, and dropdown placement.

#![doc(html_root_url = "https://docs.rs/toastkit/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod input;
pub mod layout;
pub mod notifications;
pub mod style;

#[cfg(test)]
pub(crate) mod test_utils;
