// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! Defines the `Toast` record, its identifier, and the per-request
//! `ToastOptions` that override provider defaults.

use crate::config::ToastConfig;
use crate::domain::toast::{MaxConcurrent, ToastDuration};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, never-reused toast identifier.
///
/// Generated at admission as `<unix millis>-<sequence>` (both hex). The
/// sequence is process-wide, so ids stay unique even within one millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(String);

impl ToastId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static SEQUENCE: AtomicU64 = AtomicU64::new(0);
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("{millis:x}-{seq:x}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual intent of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

/// Screen edge the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
}

/// Per-request options. Unset fields fall back to the provider config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    pub variant: Option<Variant>,
    pub placement: Option<Placement>,
    pub duration: Option<ToastDuration>,
    pub title: Option<String>,
    pub render: Option<String>,
    pub swipeable: Option<bool>,
    pub offset_y: Option<f32>,
    pub allow_multiple: Option<bool>,
    pub max_concurrent: Option<MaxConcurrent>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Auto-dismiss after `ms` milliseconds (0 = persistent).
    #[must_use]
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration = Some(ToastDuration::from_millis(ms));
        self
    }

    /// Keeps the toast until it is dismissed explicitly.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(ToastDuration::Persistent);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attaches an opaque payload for a custom renderer.
    #[must_use]
    pub fn render(mut self, payload: impl Into<String>) -> Self {
        self.render = Some(payload.into());
        self
    }

    #[must_use]
    pub fn swipeable(mut self, swipeable: bool) -> Self {
        self.swipeable = Some(swipeable);
        self
    }

    #[must_use]
    pub fn offset_y(mut self, offset: f32) -> Self {
        self.offset_y = Some(offset);
        self
    }

    #[must_use]
    pub fn allow_multiple(mut self, allow: bool) -> Self {
        self.allow_multiple = Some(allow);
        self
    }

    #[must_use]
    pub fn max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = Some(MaxConcurrent::new(max));
        self
    }
}

/// An admitted toast.
///
/// Display fields are resolved against the provider config at admission.
/// The concurrency override stays optional so the drain loop can fall back
/// to whatever cap the provider has at promotion time.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    message: String,
    title: Option<String>,
    render: Option<String>,
    variant: Variant,
    placement: Placement,
    duration: ToastDuration,
    swipeable: bool,
    offset_y: f32,
    max_concurrent: Option<MaxConcurrent>,
}

impl Toast {
    pub(crate) fn resolve(
        id: ToastId,
        message: String,
        options: ToastOptions,
        config: &ToastConfig,
    ) -> Self {
        Self {
            id,
            message,
            title: options.title,
            render: options.render,
            variant: options.variant.unwrap_or_default(),
            placement: options.placement.unwrap_or(config.position),
            duration: options.duration.unwrap_or_else(|| config.duration()),
            swipeable: options.swipeable.unwrap_or(config.swipeable),
            offset_y: options.offset_y.unwrap_or(config.offset_y),
            max_concurrent: options.max_concurrent,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn render_payload(&self) -> Option<&str> {
        self.render.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn is_swipeable(&self) -> bool {
        self.swipeable
    }

    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Per-toast concurrency cap, if one was requested.
    #[must_use]
    pub fn max_concurrent_override(&self) -> Option<MaxConcurrent> {
        self.max_concurrent
    }
}
