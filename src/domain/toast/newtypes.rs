// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! Type-safe wrappers for the numeric knobs of the toast scheduler.

use std::time::Duration;

// =============================================================================
// Max Concurrent Bounds
// =============================================================================

/// Bounds for the number of simultaneously visible toasts.
pub mod max_concurrent_bounds {
    /// Minimum value. A cap of zero would never show anything.
    pub const MIN: usize = 1;
    /// Default value.
    pub const DEFAULT: usize = 4;
}

// =============================================================================
// MaxConcurrent
// =============================================================================

/// Maximum number of toasts shown at once, never below one.
///
/// # Example
///
/// ```
/// use toastkit::domain::toast::MaxConcurrent;
///
/// assert_eq!(MaxConcurrent::new(2).value(), 2);
/// assert_eq!(MaxConcurrent::new(0).value(), 1);
/// assert_eq!(MaxConcurrent::new(100).value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxConcurrent(usize);

impl MaxConcurrent {
    /// Creates a new cap, raising zero to the minimum.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(max_concurrent_bounds::MIN))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxConcurrent {
    fn default() -> Self {
        Self(max_concurrent_bounds::DEFAULT)
    }
}

// =============================================================================
// ToastDuration
// =============================================================================

/// How long a toast stays visible once it becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastDuration {
    /// Auto-dismiss after the given number of milliseconds.
    Millis(u64),
    /// Stays until dismissed explicitly.
    Persistent,
}

impl ToastDuration {
    /// Default auto-dismiss delay (3 seconds).
    pub const DEFAULT_MS: u64 = 3000;

    /// Builds a duration from milliseconds. Zero means persistent.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Self::Persistent
        } else {
            Self::Millis(ms)
        }
    }

    /// Returns the auto-dismiss delay, or `None` for persistent toasts.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            Self::Millis(ms) => Some(Duration::from_millis(ms)),
            Self::Persistent => None,
        }
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self::Millis(Self::DEFAULT_MS)
    }
}
