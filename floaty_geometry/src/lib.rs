// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floaty Geometry: safe-area geometry for floating overlay buttons.
//!
//! This crate holds the pure geometry behind a draggable floating button:
//! - [`ScreenBounds`]: the safe rectangle a button's top-left corner is kept in.
//! - [`constrain`]: clamp a position so the button stays fully inside the area.
//! - [`should_dispose`]: decide whether a released button has left the area.
//! - [`CloseTarget`]: circular hit test against a fixed dismiss zone.
//!
//! Positions are [`kurbo::Point`]s in the host's pixel space and describe the
//! button's top-left corner; sizes are [`kurbo::Size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use floaty_geometry::{ScreenBounds, constrain, should_dispose};
//!
//! let area = ScreenBounds::new(0.0, 0.0, 400.0, 800.0);
//! let button = Size::new(100.0, 100.0);
//!
//! // Clamped back inside on both axes.
//! let p = constrain(Point::new(390.0, -20.0), Some(&area), button);
//! assert_eq!(p, Point::new(300.0, 0.0));
//!
//! // 60 px of a 100 px button past the right edge: dismissed.
//! assert!(should_dispose(Point::new(360.0, 100.0), &area, button));
//! // 40 px past: kept.
//! assert!(!should_dispose(Point::new(340.0, 100.0), &area, button));
//! ```
//!
//! ## Design notes
//!
//! - The horizontal dismiss rule is "majority crossed", the vertical rule has
//!   zero tolerance. Leaving the area sideways is a gesture; leaving it
//!   vertically runs into status bars and cutouts.
//! - Nothing here fails: inverted areas collapse, inverted clamp ranges pin to
//!   the low edge.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod close_target;
mod constrain;

pub use bounds::{Insets, ScreenBounds};
pub use close_target::{CLOSE_TARGET_DIAMETER_DP, CLOSE_TARGET_OFFSET_DP, CloseTarget};
pub use constrain::{clamp_axis, constrain, should_dispose};
