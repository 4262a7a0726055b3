// SPDX-License-Identifier: MPL-2.0
//! Layout calculations for overlay components.

pub mod dropdown;

pub use dropdown::{position, DropdownPosition, DropdownRequest, Rect, Side, Size};
