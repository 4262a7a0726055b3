// SPDX-License-Identifier: MPL-2.0
//! Placement of a dropdown panel relative to its trigger.
//!
//! The panel opens on the preferred side of the trigger and flips to the
//! other side when it does not fit and the other side has more room. Its
//! height is clamped to the room on the chosen side, and it is shifted
//! horizontally to stay inside the viewport.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in viewport coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Side of the trigger the panel opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    #[default]
    Bottom,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// Geometry needed to place a dropdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownRequest {
    pub trigger: Rect,
    pub content: Size,
    pub viewport: Size,
    /// Space between trigger and panel.
    pub gap: f32,
    /// Minimum distance kept from the viewport edges.
    pub margin: f32,
    pub preferred: Side,
}

impl DropdownRequest {
    /// Default space between trigger and panel, in pixels.
    pub const DEFAULT_GAP: f32 = 4.0;

    /// Default distance kept from the viewport edges, in pixels.
    pub const DEFAULT_MARGIN: f32 = 8.0;

    #[must_use]
    pub fn new(trigger: Rect, content: Size, viewport: Size) -> Self {
        Self {
            trigger,
            content,
            viewport,
            gap: Self::DEFAULT_GAP,
            margin: Self::DEFAULT_MARGIN,
            preferred: Side::default(),
        }
    }

    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    #[must_use]
    pub fn prefer(mut self, side: Side) -> Self {
        self.preferred = side;
        self
    }

    /// Vertical room available on `side`, never negative.
    #[must_use]
    pub fn room(&self, side: Side) -> f32 {
        let room = match side {
            Side::Top => self.trigger.y - self.gap - self.margin,
            Side::Bottom => self.viewport.height - self.trigger.bottom() - self.gap - self.margin,
        };
        room.max(0.0)
    }

    /// Computes the panel position.
    #[must_use]
    pub fn compute(&self) -> DropdownPosition {
        let preferred_room = self.room(self.preferred);
        let other = self.preferred.opposite();
        let side = if preferred_room < self.content.height && self.room(other) > preferred_room {
            other
        } else {
            self.preferred
        };

        let max_height = self.content.height.min(self.room(side)).max(0.0);
        let top = match side {
            Side::Bottom => self.trigger.bottom() + self.gap,
            Side::Top => self.trigger.y - self.gap - max_height,
        };

        DropdownPosition {
            side,
            top,
            left: self.horizontal_offset(),
            max_height,
        }
    }

    fn horizontal_offset(&self) -> f32 {
        let min = self.margin;
        let max = self.viewport.width - self.margin - self.content.width;
        if max < min {
            return min;
        }
        self.trigger.x.max(min).min(max)
    }
}

/// Resolved panel placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownPosition {
    pub side: Side,
    pub top: f32,
    pub left: f32,
    /// Height the panel may occupy before it has to scroll.
    pub max_height: f32,
}

/// Shorthand for [`DropdownRequest::compute`].
#[must_use]
pub fn position(trigger: Rect, content: Size, viewport: Size, preferred: Side) -> DropdownPosition {
    DropdownRequest::new(trigger, content, viewport)
        .prefer(preferred)
        .compute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const VIEWPORT: Size = Size::new(400.0, 800.0);

    #[test]
    fn opens_below_when_there_is_room() {
        let trigger = Rect::new(20.0, 100.0, 120.0, 40.0);
        let pos = position(trigger, Size::new(200.0, 300.0), VIEWPORT, Side::Bottom);

        assert_eq!(pos.side, Side::Bottom);
        assert_abs_diff_eq!(pos.top, 144.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.left, 20.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.max_height, 300.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn flips_above_near_bottom_edge() {
        let trigger = Rect::new(20.0, 700.0, 120.0, 40.0);
        let pos = position(trigger, Size::new(200.0, 300.0), VIEWPORT, Side::Bottom);

        assert_eq!(pos.side, Side::Top);
        assert_abs_diff_eq!(pos.max_height, 300.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.top, 396.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn preferred_top_flips_down_near_top_edge() {
        let trigger = Rect::new(20.0, 30.0, 120.0, 40.0);
        let pos = position(trigger, Size::new(200.0, 100.0), VIEWPORT, Side::Top);

        assert_eq!(pos.side, Side::Bottom);
        assert_abs_diff_eq!(pos.top, 74.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn stays_on_preferred_side_when_other_is_smaller() {
        // Neither side fits; below has 88px, above has 348px.
        let trigger = Rect::new(20.0, 360.0, 120.0, 340.0);
        let request = DropdownRequest::new(trigger, Size::new(200.0, 500.0), VIEWPORT)
            .prefer(Side::Top);
        let pos = request.compute();

        assert_eq!(pos.side, Side::Top);
        assert_abs_diff_eq!(pos.max_height, 348.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.top, 8.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn max_height_is_clamped_to_room() {
        let trigger = Rect::new(20.0, 500.0, 120.0, 40.0);
        let pos = position(trigger, Size::new(200.0, 1000.0), VIEWPORT, Side::Bottom);

        assert_eq!(pos.side, Side::Top);
        assert_abs_diff_eq!(pos.max_height, 488.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.top, 8.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn shifts_left_to_stay_inside_viewport() {
        let trigger = Rect::new(300.0, 100.0, 80.0, 40.0);
        let pos = position(trigger, Size::new(200.0, 100.0), VIEWPORT, Side::Bottom);
        assert_abs_diff_eq!(pos.left, 192.0, epsilon = F32_EPSILON);

        let trigger = Rect::new(-50.0, 100.0, 80.0, 40.0);
        let pos = position(trigger, Size::new(200.0, 100.0), VIEWPORT, Side::Bottom);
        assert_abs_diff_eq!(pos.left, 8.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn content_wider_than_viewport_pins_to_margin() {
        let trigger = Rect::new(100.0, 100.0, 80.0, 40.0);
        let pos = position(trigger, Size::new(600.0, 100.0), VIEWPORT, Side::Bottom);
        assert_abs_diff_eq!(pos.left, 8.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn room_is_never_negative() {
        let trigger = Rect::new(0.0, 0.0, 10.0, 10.0);
        let request = DropdownRequest::new(trigger, Size::new(10.0, 10.0), VIEWPORT);
        assert_abs_diff_eq!(request.room(Side::Top), 0.0, epsilon = F32_EPSILON);
    }
}
