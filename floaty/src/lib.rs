// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floaty: floating, draggable overlay buttons.
//!
//! A [`FloatingButton`] is a small button that floats above an app's UI. It
//! can be tapped, dragged around, snapped to a side, or dismissed by dropping
//! it on a close target or dragging it out of the safe area.
//!
//! The crate splits the work in three:
//!
//! - [`OverlayHost`]: the platform surface. [`ActivityOverlay`] lives inside
//!   one activity's view tree; [`GlobalOverlay`] is a system-wide window that
//!   needs the overlay permission. Both report a safe area derived from
//!   system insets (see [`safe_area`]).
//! - `floaty_gesture`: the headless drag state machine.
//! - [`FloatingButton`]: glues the two together, owns the [`Callbacks`], and
//!   implements `show`/`hide`/`dispose`.
//!
//! ## Minimal example
//!
//! ```rust
//! use floaty::{ButtonConfig, Callbacks, FloatingButton, OverlayError, OverlayHost};
//! use floaty_geometry::ScreenBounds;
//! use floaty_gesture::TouchSample;
//! use kurbo::{Point, Size};
//!
//! // A host that draws nothing, on a 400x800 screen.
//! struct Headless;
//!
//! impl OverlayHost for Headless {
//!     fn attach(&mut self, _: Point, _: Size) -> Result<(), OverlayError> { Ok(()) }
//!     fn detach(&mut self) {}
//!     fn safe_area(&self, _: Size) -> Option<ScreenBounds> {
//!         Some(ScreenBounds::new(0.0, 0.0, 400.0, 800.0))
//!     }
//!     fn density(&self) -> f64 { 1.0 }
//!     fn render(&mut self, _: Point) {}
//! }
//!
//! let config = ButtonConfig {
//!     initial_position: Point::new(100.0, 100.0),
//!     ..ButtonConfig::default()
//! };
//! let mut button = FloatingButton::new(Headless, config, Callbacks::new());
//! button.show().unwrap();
//!
//! button.on_touch(TouchSample::down(150.0, 150.0));
//! button.on_touch(TouchSample::move_to(200.0, 150.0));
//! button.on_touch(TouchSample::up(200.0, 150.0));
//! assert_eq!(button.position(), Point::new(150.0, 100.0));
//! ```
//!
//! The crate is single threaded and event driven: every call runs to
//! completion on the caller's (UI) thread. The only deferred work is the edge
//! snap animation, stepped by [`FloatingButton::tick`] from the host's frame
//! loop.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

pub mod activity;
mod button;
mod callbacks;
mod config;
mod error;
pub mod global;
mod host;
pub mod safe_area;

pub use activity::{ActivityOverlay, ViewTree};
pub use button::{FloatingButton, Lifecycle};
pub use callbacks::Callbacks;
pub use config::{Appearance, ButtonConfig, IconId};
pub use error::OverlayError;
pub use global::{GlobalOverlay, WindowService};
pub use host::OverlayHost;
