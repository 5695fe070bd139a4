// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Circle, Point, Size};

use crate::ScreenBounds;

/// Distance from the bottom of the safe area to the close target's center, in dp.
pub const CLOSE_TARGET_OFFSET_DP: f64 = 100.0;

/// Diameter of the close target, in dp.
pub const CLOSE_TARGET_DIAMETER_DP: f64 = 80.0;

/// A circular drop zone; releasing the button over it dismisses the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloseTarget {
    /// Center of the target in host pixels.
    pub center: Point,
    /// Diameter of the target in host pixels.
    pub diameter: f64,
}

impl CloseTarget {
    /// Creates a close target at `center` with the given pixel `diameter`.
    #[must_use]
    pub fn new(center: Point, diameter: f64) -> Self {
        Self { center, diameter }
    }

    /// Places the standard close target for a safe area.
    ///
    /// The target is horizontally centered and sits
    /// [`CLOSE_TARGET_OFFSET_DP`] above the bottom edge. `density` converts dp
    /// to pixels.
    #[must_use]
    pub fn for_bounds(bounds: &ScreenBounds, density: f64) -> Self {
        Self {
            center: Point::new(
                bounds.center_x(),
                bounds.bottom() - CLOSE_TARGET_OFFSET_DP * density,
            ),
            diameter: CLOSE_TARGET_DIAMETER_DP * density,
        }
    }

    /// Radius of the target in pixels.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// The target as a [`Circle`], for hosts that draw it.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius())
    }

    /// Returns `true` if a button at top-left `position` overlaps the target.
    ///
    /// The button is treated as a circle inscribed in its bounding box.
    /// Tangent circles do not overlap.
    #[must_use]
    pub fn overlaps(&self, position: Point, size: Size) -> bool {
        let button_center = position + size.to_vec2() / 2.0;
        let button_radius = size.width.min(size.height) / 2.0;
        button_center.distance(self.center) < button_radius + self.radius()
    }
}
