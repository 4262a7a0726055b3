// SPDX-License-Identifier: MPL-2.0
//! Styling support for the two component backends.
//!
//! - [`StyleBackend`]: Utility classes or inline stylesheet, chosen once
//! - [`cn`]: Conflict-aware utility class merging
//! - [`style_toast`]: Toast styling for either backend
//! - [`tokens`]: Shared design tokens

mod backend;
mod class_merge;
mod toast_style;
pub mod tokens;

pub use backend::StyleBackend;
pub use class_merge::cn;
pub use toast_style::{accent, style_toast, InlineStyle, ToastStyle};
