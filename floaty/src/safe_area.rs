// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deriving a [`ScreenBounds`] from what the platform reports.

use floaty_geometry::{Insets, ScreenBounds};
use kurbo::{Rect, Size};

/// Padding kept between the safe area and the reported window edges, in pixels.
pub const EDGE_PADDING_PX: f64 = 16.0;

/// Status bar height assumed when the platform does not report one, in dp.
pub const STATUS_BAR_FALLBACK_DP: f64 = 24.0;

/// Navigation bar height assumed when the platform does not report one, in dp.
pub const NAVIGATION_BAR_FALLBACK_DP: f64 = 48.0;

/// Safe area inside an activity: the visible frame minus system bars, padded.
#[must_use]
pub fn content_safe_area(visible_frame: Rect, system_bars: Insets, padding: f64) -> ScreenBounds {
    let frame = visible_frame.abs();
    let left = frame.x0.max(system_bars.left);
    let top = frame.y0.max(system_bars.top);
    let right = frame.x1.min(frame.x1 - system_bars.right);
    let bottom = frame.y1.min(frame.y1 - system_bars.bottom);
    ScreenBounds::new(left, top, right, bottom).inset(padding)
}

/// Safe area for a system-wide overlay: the display minus the status bar, padded.
#[must_use]
pub fn display_safe_area(display: Size, status_bar_height: f64, padding: f64) -> ScreenBounds {
    ScreenBounds::new(
        padding,
        status_bar_height + padding,
        display.width - padding,
        display.height - padding,
    )
}

/// Safe area from estimated bar heights, for hosts that report no insets.
///
/// A parent without a size yet yields a minimal area of one button at
/// `margin` from the top-left corner.
#[must_use]
pub fn fallback_safe_area(parent: Size, density: f64, margin: f64, button: Size) -> ScreenBounds {
    if parent.width <= 0.0 || parent.height <= 0.0 {
        return ScreenBounds::new(margin, margin, margin + button.width, margin + button.height);
    }
    ScreenBounds::new(
        margin,
        STATUS_BAR_FALLBACK_DP * density + margin,
        parent.width - margin,
        parent.height - NAVIGATION_BAR_FALLBACK_DP * density - margin,
    )
}

/// Makes sure a button of `button` size fits in `bounds`.
///
/// An area too small for the button falls back to the whole parent. If even
/// the parent is too small, the area grows to the button's size from its
/// top-left corner.
#[must_use]
pub fn ensure_fits(bounds: ScreenBounds, parent: Size, button: Size) -> ScreenBounds {
    if bounds.fits(button) {
        return bounds;
    }
    let whole = ScreenBounds::from_size(parent);
    if whole.fits(button) {
        log::warn!("safe area {bounds:?} cannot hold a {button:?} button; using the parent");
        return whole;
    }
    log::warn!("parent {parent:?} cannot hold a {button:?} button; growing the safe area");
    ScreenBounds::new(
        bounds.left(),
        bounds.top(),
        bounds.left() + bounds.width().max(button.width),
        bounds.top() + bounds.height().max(button.height),
    )
}
