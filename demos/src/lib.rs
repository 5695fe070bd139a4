// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Floaty demos.
//!
//! [`TerminalHost`] is an [`OverlayHost`] that "renders" by logging, so the
//! demos can run without a display.

use floaty::{OverlayError, OverlayHost};
use floaty_geometry::ScreenBounds;
use kurbo::{Point, Size};

/// A host that pretends to be a phone screen and logs what it would draw.
#[derive(Debug)]
pub struct TerminalHost {
    screen: Size,
    density: f64,
    /// Whether the button surface is attached.
    pub attached: bool,
    /// Last rendered position.
    pub last_render: Option<Point>,
}

impl TerminalHost {
    /// A host for a `screen`-sized display at `density`.
    pub fn new(screen: Size, density: f64) -> Self {
        Self {
            screen,
            density,
            attached: false,
            last_render: None,
        }
    }
}

impl OverlayHost for TerminalHost {
    fn attach(&mut self, initial: Point, size: Size) -> Result<(), OverlayError> {
        log::info!("attach {size:?} button at {initial:?}");
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        log::info!("detach");
        self.attached = false;
    }

    fn safe_area(&self, _button: Size) -> Option<ScreenBounds> {
        Some(ScreenBounds::from_size(self.screen).inset(16.0))
    }

    fn density(&self) -> f64 {
        self.density
    }

    fn render(&mut self, position: Point) {
        log::info!("render at ({:.1}, {:.1})", position.x, position.y);
        self.last_render = Some(position);
    }
}

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}
