// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping a button inside its safe area, and deciding when it has left for good.

use kurbo::{Point, Size};

use crate::ScreenBounds;

/// Clamps `value` into `[low, high]`.
///
/// Unlike [`f64::clamp`] this never panics: when the range is inverted
/// (`low > high`) the result is `low`.
#[must_use]
pub fn clamp_axis(value: f64, low: f64, high: f64) -> f64 {
    if high < low {
        return low;
    }
    value.max(low).min(high)
}

/// Constrains a top-left `position` so that a button of `size` stays inside `bounds`.
///
/// Each axis is clamped independently to `[left, right - width]` and
/// `[top, bottom - height]`. A button larger than the area pins to the
/// left/top edge. Without bounds the position is returned unchanged.
#[must_use]
pub fn constrain(position: Point, bounds: Option<&ScreenBounds>, size: Size) -> Point {
    let Some(bounds) = bounds else {
        return position;
    };
    Point::new(
        clamp_axis(position.x, bounds.left(), bounds.right() - size.width),
        clamp_axis(position.y, bounds.top(), bounds.bottom() - size.height),
    )
}

/// Returns `true` if releasing the button at `position` should dismiss it.
///
/// Horizontally the button is dismissed once more than half of its width has
/// crossed the left or right edge. Vertically there is no tolerance: any part
/// of the button above `top` or below `bottom` dismisses it.
#[must_use]
pub fn should_dispose(position: Point, bounds: &ScreenBounds, size: Size) -> bool {
    let half_width = size.width / 2.0;
    let right_overlap = (position.x + size.width - bounds.right()).max(0.0);
    let left_overlap = (bounds.left() - position.x).max(0.0);
    let horizontal = right_overlap > half_width || left_overlap > half_width;

    let vertical = position.y < bounds.top() || position.y + size.height > bounds.bottom();

    horizontal || vertical
}
