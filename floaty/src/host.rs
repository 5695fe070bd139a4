// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floaty_geometry::ScreenBounds;
use kurbo::{Point, Size};

use crate::OverlayError;

/// The platform surface a floating button is rendered through.
///
/// Implementations attach the button to a view hierarchy or overlay window
/// and report the safe area it may occupy. The gesture logic never sees which
/// kind of host it runs under.
///
/// [`FloatingButton`](crate::FloatingButton) only calls `attach` while
/// detached and `detach` while attached.
pub trait OverlayHost {
    /// Adds the button surface at `initial` with the given `size`.
    fn attach(&mut self, initial: Point, size: Size) -> Result<(), OverlayError>;

    /// Removes the button surface.
    fn detach(&mut self);

    /// Current safe area for a button of `button` size.
    ///
    /// `None` means the host cannot tell yet (for example, before the first
    /// layout pass); the button is then unconstrained.
    fn safe_area(&self, button: Size) -> Option<ScreenBounds>;

    /// Ratio of physical pixels to density-independent units.
    fn density(&self) -> f64;

    /// Moves the rendered button to `position`.
    fn render(&mut self, position: Point);
}
