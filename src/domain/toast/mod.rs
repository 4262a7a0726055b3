// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! - [`MaxConcurrent`]: Cap on simultaneously visible toasts
//! - [`ToastDuration`]: Auto-dismiss delay or persistent display

mod newtypes;

pub use newtypes::{max_concurrent_bounds, MaxConcurrent, ToastDuration};
