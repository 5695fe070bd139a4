// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floaty_geometry::{CloseTarget, ScreenBounds, constrain, should_dispose};
use kurbo::{Point, Size};

use crate::anchor::GestureAnchor;
use crate::event::{DragEvent, DragState, TouchPhase, TouchSample};
use crate::policy::{CLICK_THRESHOLD_PX, GestureConfig, MovePolicy, ReleasePolicy};
use crate::snap::{EdgeSnap, snap_target_x};

/// Why a drag ended in dismissal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisposeReason {
    /// Released over the close target.
    CloseTarget,
    /// Released too far outside the safe area.
    OutOfBounds,
}

/// Result of a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// The press never became a drag: a tap.
    Click,
    /// The drag dismissed the button. No `End` event is produced.
    Dispose(DisposeReason),
    /// The drag ended with the button constrained inside the safe area.
    Settled {
        /// The `End` event for this gesture.
        end: DragEvent,
        /// `true` if an edge snap animation was started; see [`DragController::tick`].
        snapping: bool,
    },
    /// Nothing to report: a release without a press, or a tap on a
    /// non-clickable button.
    Ignored,
}

/// Drag state machine for one visible floating button.
///
/// The controller owns the button's authoritative top-left position. It
/// consumes press/move/release samples, tells taps from drags, and decides on
/// release whether the button is dismissed, settled, or snapped to an edge.
///
/// It does not call back into the host: every entry point returns what
/// happened and the caller dispatches it.
///
/// ```
/// use floaty_geometry::ScreenBounds;
/// use floaty_gesture::{DragController, DragState, GestureConfig, ReleaseOutcome};
/// use kurbo::{Point, Size};
///
/// let mut drag = DragController::new(
///     GestureConfig::default(),
///     Point::new(100.0, 100.0),
///     Size::new(100.0, 100.0),
/// );
/// drag.set_screen_bounds(ScreenBounds::new(0.0, 0.0, 400.0, 800.0));
///
/// drag.on_press(Point::new(150.0, 150.0));
/// let ev = drag.on_move(Point::new(180.0, 200.0)).unwrap();
/// assert_eq!(ev.state, DragState::Drag);
/// assert_eq!(ev.position, Point::new(130.0, 150.0));
///
/// match drag.on_release() {
///     ReleaseOutcome::Settled { end, .. } => assert_eq!(end.position, Point::new(130.0, 150.0)),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DragController {
    config: GestureConfig,
    size: Size,
    position: Point,
    bounds: Option<ScreenBounds>,
    close_target: Option<CloseTarget>,
    anchor: GestureAnchor,
    dragging: bool,
    overlapping_close_target: bool,
    snap: Option<EdgeSnap>,
}

impl DragController {
    /// Creates a controller for a button of `size` at `initial` (top-left).
    ///
    /// The controller starts unconstrained; bounds arrive through
    /// [`set_screen_bounds`](Self::set_screen_bounds).
    #[must_use]
    pub fn new(config: GestureConfig, initial: Point, size: Size) -> Self {
        Self {
            config,
            size,
            position: initial,
            bounds: None,
            close_target: None,
            anchor: GestureAnchor::default(),
            dragging: false,
            overlapping_close_target: false,
            snap: None,
        }
    }

    /// Current top-left position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Button size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Behavior switches this controller was created with.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current safe area, if the host has delivered one.
    #[must_use]
    pub fn screen_bounds(&self) -> Option<&ScreenBounds> {
        self.bounds.as_ref()
    }

    /// Current close target, if any.
    #[must_use]
    pub fn close_target(&self) -> Option<&CloseTarget> {
        self.close_target.as_ref()
    }

    /// Returns `true` once the click threshold has been exceeded in the active gesture.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` while a drag sample overlaps the close target.
    #[must_use]
    pub fn is_overlapping_close_target(&self) -> bool {
        self.overlapping_close_target
    }

    /// Returns `true` while an edge snap animation is pending.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    /// Replaces the safe area and pulls the button back inside it.
    ///
    /// During a drag the bounds are stored but the button stays under the
    /// finger; the release constrains it. A pending edge snap is retargeted at
    /// the new area and restarts from the constrained position.
    ///
    /// Returns the (possibly) moved position.
    pub fn set_screen_bounds(&mut self, bounds: ScreenBounds) -> Point {
        self.bounds = Some(bounds);
        if !self.dragging {
            self.position = constrain(self.position, self.bounds.as_ref(), self.size);
        }
        if let (Some(_), ReleasePolicy::SnapToEdge { margin }) =
            (self.snap, self.config.release_policy)
        {
            let to_x = snap_target_x(&bounds, self.position.x, self.size.width, margin);
            log::debug!("safe area changed mid-snap, retargeting to x={to_x}");
            self.snap = Some(EdgeSnap::new(self.position, to_x));
        }
        self.position
    }

    /// Sets or removes the close target.
    pub fn set_close_target(&mut self, target: Option<CloseTarget>) {
        self.close_target = target;
    }

    /// Moves the button programmatically, through the constraint engine.
    ///
    /// Cancels a running edge snap.
    pub fn update_position(&mut self, position: Point) -> Point {
        self.snap = None;
        self.position = constrain(position, self.bounds.as_ref(), self.size);
        self.position
    }

    /// Feeds one raw sample.
    ///
    /// Returns the drag event and release outcome it produced, if any.
    pub fn handle(&mut self, sample: TouchSample) -> (Option<DragEvent>, Option<ReleaseOutcome>) {
        match sample.phase {
            TouchPhase::Down => (Some(self.on_press(sample.raw)), None),
            TouchPhase::Move => (self.on_move(sample.raw), None),
            TouchPhase::Up => match self.on_release() {
                ReleaseOutcome::Settled { end, snapping } => {
                    (Some(end), Some(ReleaseOutcome::Settled { end, snapping }))
                }
                outcome => (None, Some(outcome)),
            },
        }
    }

    /// Begins a gesture with the finger at `raw`.
    ///
    /// Cancels a running edge snap so the finger takes over from the animation.
    pub fn on_press(&mut self, raw: Point) -> DragEvent {
        self.snap = None;
        self.dragging = false;
        self.overlapping_close_target = false;
        self.anchor.start(raw, self.position);
        log::debug!("press at {raw:?}, button at {:?}", self.position);
        DragEvent::at_rest(self.position, DragState::Start)
    }

    /// Processes a move to `raw`.
    ///
    /// Returns a `Drag` event once the click threshold has been crossed on
    /// either axis; before that, and outside a gesture, returns `None`.
    pub fn on_move(&mut self, raw: Point) -> Option<DragEvent> {
        let offset = self.anchor.total_offset(raw)?;
        if !self.dragging
            && self.config.draggable
            && (offset.x.abs() > CLICK_THRESHOLD_PX || offset.y.abs() > CLICK_THRESHOLD_PX)
        {
            log::debug!("drag started after {offset:?}");
            self.dragging = true;
        }
        if !self.dragging {
            return None;
        }

        let candidate = self.anchor.follow(raw)?;
        let velocity = raw - self.position;
        self.position = match self.config.move_policy {
            MovePolicy::Free => candidate,
            MovePolicy::Constrained => constrain(candidate, self.bounds.as_ref(), self.size),
        };
        self.overlapping_close_target = self
            .close_target
            .is_some_and(|target| target.overlaps(self.position, self.size));
        log::trace!(
            "drag to {:?}, over close target: {}",
            self.position,
            self.overlapping_close_target
        );

        Some(DragEvent {
            position: self.position,
            velocity,
            state: DragState::Drag,
        })
    }

    /// Ends the gesture and decides its outcome.
    ///
    /// Close-target overlap wins over leaving the safe area; either way the
    /// button is dismissed once and no `End` event is produced.
    pub fn on_release(&mut self) -> ReleaseOutcome {
        if !self.anchor.is_active() {
            return ReleaseOutcome::Ignored;
        }
        let was_dragging = self.dragging;
        let over_close_target = self.overlapping_close_target;
        self.anchor.end();
        self.dragging = false;
        self.overlapping_close_target = false;

        if !was_dragging {
            return if self.config.clickable {
                log::debug!("click");
                ReleaseOutcome::Click
            } else {
                ReleaseOutcome::Ignored
            };
        }

        if over_close_target {
            log::debug!("released over close target at {:?}", self.position);
            return ReleaseOutcome::Dispose(DisposeReason::CloseTarget);
        }

        let auto_dispose = self.config.release_policy == ReleasePolicy::AutoDispose;
        if auto_dispose
            && self
                .bounds
                .is_some_and(|bounds| should_dispose(self.position, &bounds, self.size))
        {
            log::debug!("released outside safe area at {:?}", self.position);
            return ReleaseOutcome::Dispose(DisposeReason::OutOfBounds);
        }

        self.position = constrain(self.position, self.bounds.as_ref(), self.size);
        if let (ReleasePolicy::SnapToEdge { margin }, Some(bounds)) =
            (self.config.release_policy, self.bounds)
        {
            let to_x = snap_target_x(&bounds, self.position.x, self.size.width, margin);
            log::debug!("snapping from x={} to x={to_x}", self.position.x);
            self.snap = Some(EdgeSnap::new(self.position, to_x));
        }
        log::debug!("drag settled at {:?}", self.position);

        ReleaseOutcome::Settled {
            end: DragEvent::at_rest(self.position, DragState::End),
            snapping: self.snap.is_some(),
        }
    }

    /// Advances a pending edge snap to `now_ms`.
    ///
    /// Returns the new position if the animation moved the button. The
    /// animation is dropped once it reaches its target.
    pub fn tick(&mut self, now_ms: u64) -> Option<Point> {
        let frame = self.snap.as_mut()?.sample(now_ms);
        self.position = frame.position;
        if frame.finished {
            self.snap = None;
        }
        Some(frame.position)
    }

    /// Stops a pending edge snap where it is.
    pub fn cancel_snap(&mut self) {
        self.snap = None;
    }
}
