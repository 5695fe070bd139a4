// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture scratch state: where the finger went down and where the button was.
//!
//! ## Usage
//!
//! 1) On press, call [`GestureAnchor::start`] with the raw touch point and the
//!    button's current top-left position.
//! 2) On each move, [`GestureAnchor::total_offset`] gives the finger's
//!    displacement since the press, and [`GestureAnchor::follow`] the button
//!    position that displacement implies.
//! 3) On release, [`GestureAnchor::end`] resets the state.

use kurbo::{Point, Vec2};

/// Tracks the fixed reference points of one press/move/release sequence.
#[derive(Debug, Clone, Default, Copy)]
pub(crate) struct GestureAnchor {
    /// Raw touch position at press time.
    pub(crate) press_raw: Option<Point>,
    /// Button position at press time.
    pub(crate) origin: Option<Point>,
}

impl GestureAnchor {
    /// Start tracking a gesture pressed at `raw` while the button sits at `origin`.
    pub(crate) fn start(&mut self, raw: Point, origin: Point) {
        self.press_raw = Some(raw);
        self.origin = Some(origin);
    }

    /// Finger displacement from the press to `raw`.
    ///
    /// Returns `None` outside a gesture.
    pub(crate) fn total_offset(&self, raw: Point) -> Option<Vec2> {
        self.press_raw.map(|press| raw - press)
    }

    /// Button position that follows the finger to `raw`.
    pub(crate) fn follow(&self, raw: Point) -> Option<Point> {
        let origin = self.origin?;
        self.total_offset(raw).map(|offset| origin + offset)
    }

    /// End the current gesture and reset state.
    pub(crate) fn end(&mut self) {
        self.press_raw = None;
        self.origin = None;
    }

    /// Returns `true` between press and release.
    pub(crate) fn is_active(&self) -> bool {
        self.press_raw.is_some()
    }
}
