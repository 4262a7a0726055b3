// SPDX-License-Identifier: MPL-2.0
//! Input helpers for form fields.

pub mod mask;

pub use mask::{apply_mask, remove_mask, slot_count, Mask};
