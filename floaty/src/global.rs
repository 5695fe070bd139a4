// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hosting a button in a system-wide overlay window.

use floaty_geometry::ScreenBounds;
use kurbo::{Point, Size};

use crate::safe_area::{EDGE_PADDING_PX, STATUS_BAR_FALLBACK_DP, display_safe_area, ensure_fits};
use crate::{OverlayError, OverlayHost};

/// The window-manager operations a [`GlobalOverlay`] needs.
pub trait WindowService {
    /// Whether the app may draw over other apps.
    fn can_draw_overlays(&self) -> bool;

    /// Adds an overlay window of `size` at `position`.
    fn add_window(&mut self, position: Point, size: Size) -> Result<(), OverlayError>;

    /// Removes the overlay window.
    fn remove_window(&mut self);

    /// Moves the overlay window to `position`.
    fn move_window(&mut self, position: Point);

    /// Display size in pixels.
    fn display_size(&self) -> Size;

    /// Status bar height in pixels, if the platform reports it.
    fn status_bar_height(&self) -> Option<f64>;

    /// Ratio of physical pixels to density-independent units.
    fn density(&self) -> f64;
}

/// System-wide host.
///
/// The safe area is the display minus the status bar, padded by
/// [`EDGE_PADDING_PX`]. Attaching requires the overlay permission; without it
/// [`OverlayHost::attach`] fails with [`OverlayError::PermissionDenied`] and
/// nothing is added.
#[derive(Debug)]
pub struct GlobalOverlay<W> {
    service: W,
    padding: f64,
}

impl<W: WindowService> GlobalOverlay<W> {
    /// Wraps a window service.
    #[must_use]
    pub fn new(service: W) -> Self {
        Self {
            service,
            padding: EDGE_PADDING_PX,
        }
    }

    /// Overrides the edge padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// The wrapped window service.
    pub fn service(&self) -> &W {
        &self.service
    }

    /// The wrapped window service, mutably.
    pub fn service_mut(&mut self) -> &mut W {
        &mut self.service
    }
}

impl<W: WindowService> OverlayHost for GlobalOverlay<W> {
    fn attach(&mut self, initial: Point, size: Size) -> Result<(), OverlayError> {
        if !self.service.can_draw_overlays() {
            log::warn!("overlay permission not granted; not showing");
            return Err(OverlayError::PermissionDenied);
        }
        self.service.add_window(initial, size)?;
        log::debug!("overlay window added at {initial:?}");
        Ok(())
    }

    fn detach(&mut self) {
        self.service.remove_window();
        log::debug!("overlay window removed");
    }

    fn safe_area(&self, button: Size) -> Option<ScreenBounds> {
        let display = self.service.display_size();
        let status_bar = self
            .service
            .status_bar_height()
            .unwrap_or_else(|| STATUS_BAR_FALLBACK_DP * self.service.density());
        let area = display_safe_area(display, status_bar, self.padding);
        Some(ensure_fits(area, display, button))
    }

    fn density(&self) -> f64 {
        self.service.density()
    }

    fn render(&mut self, position: Point) {
        self.service.move_window(position);
    }
}
