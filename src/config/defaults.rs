// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: Admission policy and display defaults
//! - **Diagnostics**: Lifecycle event buffer

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::toast::{max_concurrent_bounds, ToastDuration};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Whether more than one toast may be visible at once.
pub const DEFAULT_ALLOW_MULTIPLE: bool = false;

/// Default cap on simultaneously visible toasts.
pub const DEFAULT_MAX_CONCURRENT: usize = max_concurrent_bounds::DEFAULT;

/// Default auto-dismiss delay in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = ToastDuration::DEFAULT_MS;

/// Default vertical offset applied to the toast stack, in pixels.
pub const DEFAULT_OFFSET_Y: f32 = 0.0;

/// Whether toasts can be swiped away by default.
pub const DEFAULT_SWIPEABLE: bool = false;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum number of lifecycle events kept in memory.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum number of lifecycle events kept in memory.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_CONCURRENT >= max_concurrent_bounds::MIN);
    assert!(DEFAULT_TOAST_DURATION_MS > 0);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
