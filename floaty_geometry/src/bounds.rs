// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// The safe rectangle within which a button's top-left corner is constrained.
///
/// Edges are absolute coordinates in the host's pixel space. A `ScreenBounds`
/// always satisfies `left <= right` and `top <= bottom`: inverted input (for
/// example from insets larger than the window) collapses into a degenerate
/// rectangle instead of being rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBounds {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl ScreenBounds {
    /// Creates bounds from edges, collapsing inverted axes onto `left`/`top`.
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        if right < left || bottom < top {
            log::warn!(
                "inverted safe area ({left}, {top}, {right}, {bottom}); collapsing to a degenerate rectangle"
            );
        }
        Self {
            left,
            top,
            right: right.max(left),
            bottom: bottom.max(top),
        }
    }

    /// Creates bounds covering `rect`, normalizing it first.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }

    /// Creates bounds spanning `0..size.width` and `0..size.height`.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width.max(0.0), size.height.max(0.0))
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Width of the safe area; never negative.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the safe area; never negative.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal center of the safe area.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns `true` if the area has no extent on at least one axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Returns `true` if a button of `size` fits entirely inside the area.
    #[must_use]
    pub fn fits(&self, size: Size) -> bool {
        self.width() >= size.width && self.height() >= size.height
    }

    /// Returns the bounds inset by `amount` on every edge.
    ///
    /// Insetting past the center collapses the area rather than inverting it.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    /// The bounds as a [`Rect`].
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// Returns `true` if `point` lies inside the area, edges included.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

impl From<Rect> for ScreenBounds {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// Per-edge distances reserved by system UI (status bar, navigation bar, cutout).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    /// Reserved width on the left edge.
    pub left: f64,
    /// Reserved height at the top edge.
    pub top: f64,
    /// Reserved width on the right edge.
    pub right: f64,
    /// Reserved height at the bottom edge.
    pub bottom: f64,
}

impl Insets {
    /// No reserved space.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates insets from individual edges.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates insets with the same value on every edge.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Edge-wise maximum, used to merge system bars with a display cutout.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}
