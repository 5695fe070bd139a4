// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floaty Gesture: the touch state machine behind a floating, draggable button.
//!
//! A [`DragController`] turns a raw press/move/release stream into:
//!
//! - a tap ([`ReleaseOutcome::Click`]) when the finger stays within
//!   [`CLICK_THRESHOLD_PX`] of the press on both axes;
//! - a drag otherwise, reported as [`DragEvent`]s in the order
//!   `Start`, `Drag`\*, `End`;
//! - on release, one of: dismissal over the close target, dismissal for
//!   leaving the safe area, or settling back inside it, optionally followed by
//!   an [`EdgeSnap`] animation.
//!
//! The controller is headless and single threaded. It never calls back into
//! the host; it returns what happened and lets the caller dispatch it.
//! Geometry (bounds, constraint, close-target hit testing) comes from
//! `floaty_geometry`.
//!
//! ## Minimal example
//!
//! ```rust
//! use floaty_gesture::{DragController, GestureConfig, ReleaseOutcome, TouchSample};
//! use kurbo::{Point, Size};
//!
//! let mut drag = DragController::new(
//!     GestureConfig::default(),
//!     Point::new(0.0, 0.0),
//!     Size::new(100.0, 100.0),
//! );
//!
//! // A 4 px wobble is still a tap.
//! drag.handle(TouchSample::down(50.0, 50.0));
//! let (event, _) = drag.handle(TouchSample::move_to(54.0, 50.0));
//! assert!(event.is_none());
//! let (_, outcome) = drag.handle(TouchSample::up(54.0, 50.0));
//! assert_eq!(outcome, Some(ReleaseOutcome::Click));
//! ```
//!
//! ## Policies
//!
//! - [`MovePolicy`] decides whether drag samples are clamped to the safe area
//!   (the default lets the button leave it, so the user can reach the close
//!   target or drag it off an edge).
//! - [`ReleasePolicy`] picks one finalization: auto-dismiss outside the safe
//!   area, or snap to the nearer side. Releasing over the close target
//!   dismisses under either policy.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod controller;
mod event;
mod policy;
pub mod snap;

pub use controller::{DisposeReason, DragController, ReleaseOutcome};
pub use event::{DragEvent, DragState, TouchPhase, TouchSample};
pub use policy::{CLICK_THRESHOLD_PX, GestureConfig, MovePolicy, ReleasePolicy};
pub use snap::{EdgeSnap, SNAP_DURATION_MS, SnapFrame, snap_target_x};
