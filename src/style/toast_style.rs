// SPDX-License-Identifier: MPL-2.0
//! Toast styling for both backends.

use super::class_merge::cn;
use super::tokens::{border, palette, radius, spacing};
use super::StyleBackend;
use crate::notifications::{Placement, Toast, Variant};

/// Inline style object for the stylesheet backend.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineStyle {
    pub background: &'static str,
    pub border_color: &'static str,
    pub border_width: f32,
    pub border_radius: f32,
    pub text_color: &'static str,
    pub padding: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

/// Resolved style for one toast.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastStyle {
    Classes(String),
    Inline(InlineStyle),
}

/// Accent colour for a variant.
#[must_use]
pub fn accent(variant: Variant) -> &'static str {
    match variant {
        Variant::Success => palette::SUCCESS_500,
        Variant::Info => palette::INFO_500,
        Variant::Warning => palette::WARNING_500,
        Variant::Error => palette::ERROR_500,
    }
}

fn variant_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Success => "border-green-500",
        Variant::Info => "border-blue-500",
        Variant::Warning => "border-amber-500",
        Variant::Error => "border-red-600",
    }
}

const BASE_CLASSES: &str = "flex items-center gap-2 rounded-md border-2 bg-white p-3 text-gray-900 shadow-md";

/// Styles a toast for the given backend.
///
/// `extra` holds caller-supplied classes; it is merged last so it overrides
/// the defaults. The stylesheet backend ignores it.
#[must_use]
pub fn style_toast(backend: StyleBackend, toast: &Toast, extra: &str) -> ToastStyle {
    match backend {
        StyleBackend::Utility => {
            let offset = offset_class(toast.placement(), toast.offset_y());
            ToastStyle::Classes(cn([
                BASE_CLASSES,
                variant_classes(toast.variant()),
                offset.as_str(),
                extra,
            ]))
        }
        StyleBackend::Stylesheet => {
            let (margin_top, margin_bottom) = match toast.placement() {
                Placement::Top => (toast.offset_y(), 0.0),
                Placement::Bottom => (0.0, toast.offset_y()),
            };
            ToastStyle::Inline(InlineStyle {
                background: palette::WHITE,
                border_color: accent(toast.variant()),
                border_width: border::WIDTH_MD,
                border_radius: radius::MD,
                text_color: palette::GRAY_900,
                padding: spacing::SM,
                margin_top,
                margin_bottom,
            })
        }
    }
}

fn offset_class(placement: Placement, offset_y: f32) -> String {
    if offset_y == 0.0 {
        return String::new();
    }
    let side = match placement {
        Placement::Top => "mt",
        Placement::Bottom => "mb",
    };
    format!("{side}-[{offset_y}px]")
}
