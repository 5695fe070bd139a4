// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Finger displacement, in device pixels on either axis, that turns a press into a drag.
pub const CLICK_THRESHOLD_PX: f64 = 10.0;

/// Whether the button is kept inside the safe area while the finger is down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Follow the finger anywhere; the position is constrained on release.
    ///
    /// This lets the user reach the close target or drag past an edge.
    #[default]
    Free,
    /// Clamp every drag sample into the safe area.
    Constrained,
}

/// What happens when a drag is released away from the close target.
///
/// The two policies are alternatives: a button either dismisses itself when
/// dropped outside the safe area, or snaps to the nearest side.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ReleasePolicy {
    /// Dismiss the button if [`should_dispose`](floaty_geometry::should_dispose)
    /// holds, otherwise settle it inside the safe area.
    #[default]
    AutoDispose,
    /// Settle inside the safe area, then animate horizontally to the nearer side.
    SnapToEdge {
        /// Gap in pixels kept between the button and the side it snaps to.
        margin: f64,
    },
}

/// Behavior switches for a [`DragController`](crate::DragController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// If `false`, moves never start a drag and every release is a click.
    pub draggable: bool,
    /// If `false`, releases that are not drags produce no click.
    pub clickable: bool,
    /// Mid-drag constraint.
    pub move_policy: MovePolicy,
    /// Finalization on release.
    pub release_policy: ReleasePolicy,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            draggable: true,
            clickable: true,
            move_policy: MovePolicy::default(),
            release_policy: ReleasePolicy::default(),
        }
    }
}
