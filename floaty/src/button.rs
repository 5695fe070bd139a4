// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floaty_geometry::{CloseTarget, ScreenBounds};
use floaty_gesture::{DragController, DragState, ReleaseOutcome, TouchSample};
use kurbo::{Point, Size};

use crate::safe_area::ensure_fits;
use crate::{ButtonConfig, Callbacks, OverlayError, OverlayHost};

/// Host lifecycle notifications a button can follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// The host became visible: show the button.
    Start,
    /// The host went to the background: hide the button.
    Stop,
    /// The host is going away: dispose the button.
    Destroy,
}

/// A floating, draggable button shown through an [`OverlayHost`].
///
/// Each [`show`](Self::show) creates a fresh [`DragController`] at the
/// configured initial position; [`hide`](Self::hide) discards it, so nothing
/// about position survives a hide/show cycle. [`dispose`](Self::dispose) is
/// final.
#[derive(Debug)]
pub struct FloatingButton<H> {
    host: H,
    config: ButtonConfig,
    callbacks: Callbacks,
    controller: Option<DragController>,
    disposed: bool,
}

impl<H: OverlayHost> FloatingButton<H> {
    /// Creates a hidden button.
    #[must_use]
    pub fn new(host: H, config: ButtonConfig, callbacks: Callbacks) -> Self {
        Self {
            host,
            config,
            callbacks,
            controller: None,
            disposed: false,
        }
    }

    /// Attaches the button to its host.
    ///
    /// Does nothing if the button is already visible or has been disposed.
    pub fn show(&mut self) -> Result<(), OverlayError> {
        if self.disposed {
            log::warn!("show() on a disposed button");
            return Ok(());
        }
        if self.controller.is_some() {
            return Ok(());
        }
        let size = self.config.size;
        let initial = self.config.initial_position;
        self.host.attach(initial, size)?;

        let mut controller = DragController::new(self.config.gesture_config(), initial, size);
        if let Some(bounds) = self.host.safe_area(size) {
            controller.set_screen_bounds(bounds);
            controller.set_close_target(Some(CloseTarget::for_bounds(&bounds, self.host.density())));
        }
        let position = controller.position();
        self.controller = Some(controller);
        log::debug!("shown at {position:?}");
        self.publish(position);
        Ok(())
    }

    /// Detaches the button. Does nothing if it is already hidden.
    ///
    /// A running edge snap stops here.
    pub fn hide(&mut self) {
        if self.controller.take().is_some() {
            self.host.detach();
            log::debug!("hidden");
        }
    }

    /// Hides the button and releases its listeners. Irreversible and idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.hide();
        self.callbacks = Callbacks::default();
        self.disposed = true;
        log::debug!("disposed");
    }

    /// Follows a host lifecycle change.
    pub fn on_lifecycle(&mut self, event: Lifecycle) -> Result<(), OverlayError> {
        match event {
            Lifecycle::Start => self.show()?,
            Lifecycle::Stop => self.hide(),
            Lifecycle::Destroy => self.dispose(),
        }
        Ok(())
    }

    /// Returns `true` while the button is attached.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.controller.is_some()
    }

    /// Returns `true` once the button has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Current top-left position, or the origin while hidden.
    #[must_use]
    pub fn position(&self) -> Point {
        self.controller
            .as_ref()
            .map_or(Point::ZERO, DragController::position)
    }

    /// Moves the button through the constraint engine. Ignored while hidden.
    pub fn update_position(&mut self, x: f64, y: f64) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        let position = controller.update_position(Point::new(x, y));
        self.publish(position);
    }

    /// Feeds one raw touch sample. Returns `true` if the button consumed it.
    pub fn on_touch(&mut self, sample: TouchSample) -> bool {
        let Some(controller) = self.controller.as_mut() else {
            return false;
        };
        let (event, outcome) = controller.handle(sample);

        if let Some(event) = event {
            if event.state != DragState::Start {
                self.publish(event.position);
            }
            self.callbacks.drag(&event);
        }
        match outcome {
            Some(ReleaseOutcome::Click) => self.callbacks.click(),
            Some(ReleaseOutcome::Dispose(reason)) => {
                log::debug!("dismissed by gesture: {reason:?}");
                self.callbacks.dispose();
                self.dispose();
            }
            Some(ReleaseOutcome::Settled { .. } | ReleaseOutcome::Ignored) | None => {}
        }
        true
    }

    /// Advances a pending edge snap to `now_ms`.
    ///
    /// Call once per frame. Returns `true` if the button moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(position) = self
            .controller
            .as_mut()
            .and_then(|controller| controller.tick(now_ms))
        else {
            return false;
        };
        self.publish(position);
        true
    }

    /// Returns `true` while an edge snap is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(DragController::is_snapping)
    }

    /// Replaces the safe area, for hosts that push geometry changes.
    ///
    /// The close target moves with the area and the button is pulled back
    /// inside. An area too small for the button is replaced by the host's own
    /// safe area, or grown to fit when the host has none that fits.
    pub fn set_screen_bounds(&mut self, bounds: ScreenBounds) {
        if self.controller.is_none() {
            return;
        }
        let size = self.config.size;
        let bounds = if bounds.fits(size) {
            bounds
        } else {
            match self.host.safe_area(size) {
                Some(area) if area.fits(size) => {
                    log::warn!("pushed area {bounds:?} cannot hold the button; using {area:?}");
                    area
                }
                _ => ensure_fits(bounds, Size::ZERO, size),
            }
        };
        let density = self.host.density();
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        let before = controller.position();
        let position = controller.set_screen_bounds(bounds);
        controller.set_close_target(Some(CloseTarget::for_bounds(&bounds, density)));
        if position != before {
            self.publish(position);
        }
    }

    /// Asks the host for its current safe area and applies it.
    ///
    /// Call after rotation, layout, or inset changes.
    pub fn refresh_screen_bounds(&mut self) {
        if let Some(bounds) = self.host.safe_area(self.config.size) {
            self.set_screen_bounds(bounds);
        }
    }

    /// Returns `true` while a drag hovers over the close target, for highlighting it.
    #[must_use]
    pub fn is_overlapping_close_target(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(DragController::is_overlapping_close_target)
    }

    /// The close target to draw while dragging, if the button is visible.
    #[must_use]
    pub fn close_target(&self) -> Option<CloseTarget> {
        self.controller
            .as_ref()
            .and_then(|controller| controller.close_target().copied())
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(DragController::is_dragging)
    }

    /// The configuration this button was created with.
    #[must_use]
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn publish(&mut self, position: Point) {
        self.host.render(position);
        self.callbacks.position_changed(position);
    }
}
