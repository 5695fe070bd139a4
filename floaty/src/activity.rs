// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hosting a button inside one activity's view tree.

use floaty_geometry::{Insets, ScreenBounds};
use kurbo::{Point, Rect, Size};

use crate::safe_area::{EDGE_PADDING_PX, content_safe_area, ensure_fits, fallback_safe_area};
use crate::{OverlayError, OverlayHost};

/// The parts of an activity's content view an [`ActivityOverlay`] needs.
pub trait ViewTree {
    /// Adds the button surface to the content view.
    fn add_overlay(&mut self, size: Size) -> Result<(), OverlayError>;

    /// Removes the button surface from the content view.
    fn remove_overlay(&mut self);

    /// The window's visible display frame, or `None` before layout.
    fn visible_frame(&self) -> Option<Rect>;

    /// System bar insets, if the platform reports them.
    fn system_bar_insets(&self) -> Option<Insets>;

    /// Ratio of physical pixels to density-independent units.
    fn density(&self) -> f64;

    /// Moves the button surface to `position`.
    fn place(&mut self, position: Point);
}

/// Activity-scoped host.
///
/// The safe area is the visible content frame intersected with the system
/// bars, padded by [`EDGE_PADDING_PX`]. Without reported insets, bar heights
/// are estimated (see [`fallback_safe_area`]). The host recomputes the area
/// whenever it is asked, so callers should forward layout and inset changes through
/// [`FloatingButton::refresh_screen_bounds`](crate::FloatingButton::refresh_screen_bounds).
#[derive(Debug)]
pub struct ActivityOverlay<T> {
    tree: T,
    padding: f64,
}

impl<T: ViewTree> ActivityOverlay<T> {
    /// Wraps an activity's content view.
    #[must_use]
    pub fn new(tree: T) -> Self {
        Self {
            tree,
            padding: EDGE_PADDING_PX,
        }
    }

    /// Overrides the edge padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// The wrapped view tree.
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// The wrapped view tree, mutably.
    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }
}

impl<T: ViewTree> OverlayHost for ActivityOverlay<T> {
    fn attach(&mut self, initial: Point, size: Size) -> Result<(), OverlayError> {
        self.tree.add_overlay(size)?;
        self.tree.place(initial);
        log::debug!("attached to activity content view");
        Ok(())
    }

    fn detach(&mut self) {
        self.tree.remove_overlay();
        log::debug!("detached from activity content view");
    }

    fn safe_area(&self, button: Size) -> Option<ScreenBounds> {
        let frame = self.tree.visible_frame()?;
        let area = match self.tree.system_bar_insets() {
            Some(bars) => content_safe_area(frame, bars, self.padding),
            None => fallback_safe_area(frame.size(), self.tree.density(), self.padding, button),
        };
        Some(ensure_fits(area, frame.size(), button))
    }

    fn density(&self) -> f64 {
        self.tree.density()
    }

    fn render(&mut self, position: Point) {
        self.tree.place(position);
    }
}
