// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use floaty_gesture::DragEvent;
use kurbo::Point;

/// Optional listeners for a floating button. Unset listeners are no-ops.
///
/// ```
/// use floaty::Callbacks;
///
/// let callbacks = Callbacks::new()
///     .on_click(|| println!("tapped"))
///     .on_dispose(|| println!("dismissed"));
/// ```
#[derive(Default)]
pub struct Callbacks {
    click: Option<Box<dyn FnMut()>>,
    drag: Option<Box<dyn FnMut(&DragEvent)>>,
    dispose: Option<Box<dyn FnMut()>>,
    position_changed: Option<Box<dyn FnMut(Point)>>,
}

impl Callbacks {
    /// No listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on a tap.
    #[must_use]
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.click = Some(Box::new(f));
        self
    }

    /// Called for every `Start`, `Drag` and `End` event.
    #[must_use]
    pub fn on_drag(mut self, f: impl FnMut(&DragEvent) + 'static) -> Self {
        self.drag = Some(Box::new(f));
        self
    }

    /// Called once when a gesture dismisses the button.
    #[must_use]
    pub fn on_dispose(mut self, f: impl FnMut() + 'static) -> Self {
        self.dispose = Some(Box::new(f));
        self
    }

    /// Called whenever the button's position changes, including animation frames.
    #[must_use]
    pub fn on_position_changed(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.position_changed = Some(Box::new(f));
        self
    }

    pub(crate) fn click(&mut self) {
        if let Some(f) = &mut self.click {
            f();
        }
    }

    pub(crate) fn drag(&mut self, event: &DragEvent) {
        if let Some(f) = &mut self.drag {
            f(event);
        }
    }

    pub(crate) fn dispose(&mut self) {
        if let Some(f) = &mut self.dispose {
            f();
        }
    }

    pub(crate) fn position_changed(&mut self, position: Point) {
        if let Some(f) = &mut self.position_changed {
            f(position);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("click", &self.click.is_some())
            .field("drag", &self.drag.is_some())
            .field("dispose", &self.dispose.is_some())
            .field("position_changed", &self.position_changed.is_some())
            .finish()
    }
}
