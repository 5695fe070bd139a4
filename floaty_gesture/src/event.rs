// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Phase of a raw touch sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The finger went down.
    Down,
    /// The finger moved while down.
    Move,
    /// The finger was lifted.
    Up,
}

/// One raw touch sample in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    /// Which part of the gesture this sample belongs to.
    pub phase: TouchPhase,
    /// Raw screen position of the finger.
    pub raw: Point,
}

impl TouchSample {
    /// A press at `(x, y)`.
    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Down,
            raw: Point::new(x, y),
        }
    }

    /// A move to `(x, y)`.
    #[must_use]
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Move,
            raw: Point::new(x, y),
        }
    }

    /// A release at `(x, y)`.
    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Up,
            raw: Point::new(x, y),
        }
    }
}

/// Lifecycle of a drag, reported through [`DragEvent`].
///
/// Within one gesture the order is always `Start`, then any number of `Drag`,
/// then at most one `End`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragState {
    /// The finger went down on the button.
    Start,
    /// The button followed the finger.
    Drag,
    /// The drag finished and the button settled inside the safe area.
    End,
}

/// A drag lifecycle notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    /// Button top-left position after this event.
    pub position: Point,
    /// Raw touch minus the previous button position; zero for `Start` and `End`.
    ///
    /// This is a per-sample delta, not a time-normalized rate.
    pub velocity: Vec2,
    /// Which lifecycle step this is.
    pub state: DragState,
}

impl DragEvent {
    pub(crate) fn at_rest(position: Point, state: DragState) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            state,
        }
    }
}
