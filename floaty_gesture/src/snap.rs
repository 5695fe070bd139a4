// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge snapping: after a drag, slide the button to the nearer side of the safe area.
//!
//! The animation is frame driven. The host calls [`EdgeSnap::sample`] from its
//! render loop with a monotonic timestamp; the first sample fixes the start
//! time, so there is no timer or thread behind it.

use floaty_geometry::{ScreenBounds, clamp_axis};
use kurbo::Point;

/// Duration of the snap animation in milliseconds.
pub const SNAP_DURATION_MS: u64 = 200;

/// Horizontal position a button of `width` at `x` snaps to.
///
/// A button whose center is left of the area's center goes to
/// `left + margin`; otherwise to `right - width - margin`. The result is kept
/// inside the constrainable range.
#[must_use]
pub fn snap_target_x(bounds: &ScreenBounds, x: f64, width: f64, margin: f64) -> f64 {
    let center = x + width / 2.0;
    let target = if center < bounds.center_x() {
        bounds.left() + margin
    } else {
        bounds.right() - width - margin
    };
    clamp_axis(target, bounds.left(), bounds.right() - width)
}

/// One step of an [`EdgeSnap`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapFrame {
    /// Interpolated button position.
    pub position: Point,
    /// `true` on the frame that reaches the target.
    pub finished: bool,
}

/// Linear horizontal interpolation from a release point to a snap target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSnap {
    from: Point,
    to_x: f64,
    duration_ms: u64,
    started_at: Option<u64>,
}

impl EdgeSnap {
    /// Creates an animation from `from` to `(to_x, from.y)` over [`SNAP_DURATION_MS`].
    #[must_use]
    pub fn new(from: Point, to_x: f64) -> Self {
        Self {
            from,
            to_x,
            duration_ms: SNAP_DURATION_MS,
            started_at: None,
        }
    }

    /// Overrides the duration. Zero jumps straight to the target.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Where the animation ends.
    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.to_x, self.from.y)
    }

    /// Where the animation begins.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.from
    }

    /// Advances to `now_ms` and returns the position for this frame.
    ///
    /// Timestamps earlier than the first sample are treated as the first sample.
    pub fn sample(&mut self, now_ms: u64) -> SnapFrame {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(started_at);
        if elapsed >= self.duration_ms {
            return SnapFrame {
                position: self.target(),
                finished: true,
            };
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        SnapFrame {
            position: self.from.lerp(self.target(), t),
            finished: false,
        }
    }
}
