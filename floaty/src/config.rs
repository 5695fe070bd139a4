// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floaty_gesture::{GestureConfig, MovePolicy, ReleasePolicy};
use kurbo::{Point, Size};
use peniko::Color;

/// Opaque handle to an icon resource owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// How the host should draw the button.
#[derive(Clone, Copy, Debug)]
pub enum Appearance {
    /// The library's default look: a tinted circle with an optional icon.
    Default {
        /// Fill color of the circle.
        background: Color,
        /// Icon drawn centered on the circle.
        icon: Option<IconId>,
    },
    /// The host draws its own content inside the button's bounds.
    Custom,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::Default {
            background: Color::from_rgb8(0, 0, 255),
            icon: None,
        }
    }
}

/// Everything a host needs to know to show a floating button.
#[derive(Clone, Debug)]
pub struct ButtonConfig {
    /// Button size in pixels.
    pub size: Size,
    /// Top-left position used each time the button is shown.
    pub initial_position: Point,
    /// Whether the button follows the finger.
    pub draggable: bool,
    /// Whether taps are reported.
    pub clickable: bool,
    /// Snap to the nearer side on release instead of auto-dismissing.
    pub snap_to_edge: bool,
    /// Gap kept from the side the button snaps to, in pixels.
    pub margin_from_edge: f64,
    /// Whether drag samples are clamped to the safe area.
    pub move_policy: MovePolicy,
    /// Visual presentation.
    pub appearance: Appearance,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            size: Size::new(100.0, 100.0),
            initial_position: Point::ZERO,
            draggable: true,
            clickable: true,
            snap_to_edge: false,
            margin_from_edge: 16.0,
            move_policy: MovePolicy::Free,
            appearance: Appearance::default(),
        }
    }
}

impl ButtonConfig {
    /// The gesture behavior this configuration selects.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            draggable: self.draggable,
            clickable: self.clickable,
            move_policy: self.move_policy,
            release_policy: if self.snap_to_edge {
                ReleasePolicy::SnapToEdge {
                    margin: self.margin_from_edge,
                }
            } else {
                ReleasePolicy::AutoDispose
            },
        }
    }
}
