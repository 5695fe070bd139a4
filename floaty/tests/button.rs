// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `FloatingButton` driven through recording hosts.
//!
//! These cover the host-facing contract: idempotent show/hide/dispose, callback
//! dispatch, dismissal, edge snapping, and the two host variants.

use std::cell::RefCell;
use std::rc::Rc;

use floaty::{
    ActivityOverlay, ButtonConfig, Callbacks, FloatingButton, GlobalOverlay, Lifecycle,
    OverlayError, OverlayHost, ViewTree, WindowService,
};
use floaty_geometry::{Insets, ScreenBounds};
use floaty_gesture::{DragState, TouchSample};
use kurbo::{Point, Rect, Size};

#[derive(Debug, Default)]
struct HostLog {
    attached: usize,
    detached: usize,
    rendered: Vec<Point>,
}

#[derive(Debug, Clone)]
struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
    area: Option<ScreenBounds>,
}

impl RecordingHost {
    fn new() -> Self {
        Self {
            log: Rc::default(),
            area: Some(ScreenBounds::new(0.0, 0.0, 400.0, 800.0)),
        }
    }
}

impl OverlayHost for RecordingHost {
    fn attach(&mut self, _initial: Point, _size: Size) -> Result<(), OverlayError> {
        self.log.borrow_mut().attached += 1;
        Ok(())
    }

    fn detach(&mut self) {
        self.log.borrow_mut().detached += 1;
    }

    fn safe_area(&self, _button: Size) -> Option<ScreenBounds> {
        self.area
    }

    fn density(&self) -> f64 {
        1.0
    }

    fn render(&mut self, position: Point) {
        self.log.borrow_mut().rendered.push(position);
    }
}

#[derive(Debug, Default)]
struct Seen {
    clicks: usize,
    disposes: usize,
    drags: Vec<DragState>,
    positions: Vec<Point>,
}

fn recording_callbacks(seen: &Rc<RefCell<Seen>>) -> Callbacks {
    let (a, b, c, d) = (seen.clone(), seen.clone(), seen.clone(), seen.clone());
    Callbacks::new()
        .on_click(move || a.borrow_mut().clicks += 1)
        .on_dispose(move || b.borrow_mut().disposes += 1)
        .on_drag(move |ev| c.borrow_mut().drags.push(ev.state))
        .on_position_changed(move |p| d.borrow_mut().positions.push(p))
}

fn config() -> ButtonConfig {
    ButtonConfig {
        initial_position: Point::new(150.0, 300.0),
        ..ButtonConfig::default()
    }
}

fn button(config: ButtonConfig) -> (FloatingButton<RecordingHost>, Rc<RefCell<Seen>>) {
    let seen = Rc::new(RefCell::new(Seen::default()));
    let button = FloatingButton::new(RecordingHost::new(), config, recording_callbacks(&seen));
    (button, seen)
}

fn drag(button: &mut FloatingButton<RecordingHost>, from: Point, to: Point) {
    button.on_touch(TouchSample::down(from.x, from.y));
    button.on_touch(TouchSample::move_to(to.x, to.y));
    button.on_touch(TouchSample::up(to.x, to.y));
}

#[test]
fn show_and_hide_are_idempotent() {
    let (mut button, _) = button(config());
    assert!(!button.is_visible());

    button.show().unwrap();
    button.show().unwrap();
    assert!(button.is_visible());
    assert_eq!(button.host().log.borrow().attached, 1);

    button.hide();
    button.hide();
    assert!(!button.is_visible());
    assert_eq!(button.host().log.borrow().detached, 1);
}

#[test]
fn each_show_starts_from_initial_position() {
    let (mut button, _) = button(config());
    button.show().unwrap();
    drag(&mut button, Point::new(200.0, 350.0), Point::new(260.0, 400.0));
    assert_eq!(button.position(), Point::new(210.0, 350.0));

    button.hide();
    assert_eq!(button.position(), Point::ZERO);
    button.show().unwrap();
    assert_eq!(button.position(), Point::new(150.0, 300.0));
}

#[test]
fn tap_fires_click_only() {
    let (mut button, seen) = button(config());
    button.show().unwrap();
    button.on_touch(TouchSample::down(200.0, 350.0));
    button.on_touch(TouchSample::move_to(205.0, 355.0));
    button.on_touch(TouchSample::up(205.0, 355.0));

    let seen = seen.borrow();
    assert_eq!(seen.clicks, 1);
    assert_eq!(seen.drags, vec![DragState::Start]);
}

#[test]
fn drag_reports_events_and_positions_in_order() {
    let (mut button, seen) = button(config());
    button.show().unwrap();
    seen.borrow_mut().positions.clear();

    drag(&mut button, Point::new(200.0, 350.0), Point::new(260.0, 400.0));

    assert_eq!(
        button.host().log.borrow().rendered.last(),
        Some(&Point::new(210.0, 350.0))
    );
    let seen = seen.borrow();
    assert_eq!(seen.clicks, 0);
    assert_eq!(
        seen.drags,
        vec![DragState::Start, DragState::Drag, DragState::End]
    );
    assert_eq!(
        seen.positions,
        vec![Point::new(210.0, 350.0), Point::new(210.0, 350.0)]
    );
}

#[test]
fn close_target_dismisses_once() {
    let (mut button, seen) = button(config());
    button.show().unwrap();
    // Standard close target: center (200, 700) on a 400x800 area at density 1.
    button.on_touch(TouchSample::down(200.0, 350.0));
    button.on_touch(TouchSample::move_to(200.0, 750.0));
    assert!(button.is_overlapping_close_target());
    button.on_touch(TouchSample::up(200.0, 750.0));

    assert_eq!(seen.borrow().disposes, 1);
    assert!(!seen.borrow().drags.contains(&DragState::End));
    assert!(button.is_disposed());
    assert!(!button.is_visible());
    assert_eq!(button.host().log.borrow().detached, 1);

    // Disposed buttons stay gone.
    button.show().unwrap();
    assert!(!button.is_visible());
    assert!(!button.on_touch(TouchSample::down(0.0, 0.0)));
    button.dispose();
    assert_eq!(seen.borrow().disposes, 1);
}

#[test]
fn dragging_off_the_side_dismisses() {
    let (mut button, seen) = button(config());
    button.show().unwrap();
    // Button 150 -> 360: 60 of 100 px past the right edge.
    drag(&mut button, Point::new(200.0, 350.0), Point::new(410.0, 350.0));
    assert_eq!(seen.borrow().disposes, 1);
    assert!(button.is_disposed());
}

#[test]
fn snap_to_edge_animates_on_tick() {
    let (mut button, seen) = button(ButtonConfig {
        snap_to_edge: true,
        margin_from_edge: 16.0,
        ..config()
    });
    button.show().unwrap();
    // Release at x = 100: center 150 is left of 200, so snap to 16.
    drag(&mut button, Point::new(200.0, 350.0), Point::new(150.0, 350.0));
    assert!(button.is_animating());
    assert_eq!(button.position(), Point::new(100.0, 300.0));

    assert!(button.tick(1_000));
    assert!(button.tick(1_100));
    assert_eq!(button.position(), Point::new(58.0, 300.0));
    assert!(button.tick(1_200));
    assert_eq!(button.position(), Point::new(16.0, 300.0));
    assert!(!button.is_animating());
    assert!(!button.tick(1_300));

    assert_eq!(seen.borrow().positions.last(), Some(&Point::new(16.0, 300.0)));
    assert_eq!(seen.borrow().disposes, 0);
}

#[test]
fn hide_stops_snap() {
    let (mut button, _) = button(ButtonConfig {
        snap_to_edge: true,
        ..config()
    });
    button.show().unwrap();
    drag(&mut button, Point::new(200.0, 350.0), Point::new(150.0, 350.0));
    assert!(button.is_animating());
    button.hide();
    assert!(!button.is_animating());
    assert!(!button.tick(5_000));
}

#[test]
fn update_position_is_constrained() {
    let (mut button, seen) = button(config());
    button.update_position(10.0, 10.0);
    assert_eq!(button.position(), Point::ZERO);

    button.show().unwrap();
    button.update_position(-40.0, 900.0);
    assert_eq!(button.position(), Point::new(0.0, 700.0));
    assert_eq!(seen.borrow().positions.last(), Some(&Point::new(0.0, 700.0)));
}

#[test]
fn rotation_pulls_button_inside() {
    let (mut button, _) = button(config());
    button.show().unwrap();
    button.update_position(150.0, 650.0);

    button.set_screen_bounds(ScreenBounds::new(0.0, 0.0, 800.0, 400.0));
    assert_eq!(button.position(), Point::new(150.0, 300.0));
    assert_eq!(
        button.close_target().map(|t| t.center),
        Some(Point::new(400.0, 300.0))
    );
}

#[test]
fn rotation_mid_snap_lands_inside_new_area() {
    let seen = Rc::new(RefCell::new(Seen::default()));
    let host = RecordingHost {
        area: Some(ScreenBounds::new(0.0, 0.0, 800.0, 400.0)),
        ..RecordingHost::new()
    };
    let config = ButtonConfig {
        snap_to_edge: true,
        margin_from_edge: 16.0,
        ..config()
    };
    let mut button = FloatingButton::new(host, config, recording_callbacks(&seen));
    button.show().unwrap();
    // Released on the right half of the landscape area: heads for x = 684.
    drag(&mut button, Point::new(200.0, 350.0), Point::new(700.0, 350.0));
    assert!(button.tick(0));
    assert_eq!(button.position(), Point::new(650.0, 300.0));

    let portrait = ScreenBounds::new(0.0, 0.0, 400.0, 800.0);
    button.set_screen_bounds(portrait);
    assert_eq!(button.position(), Point::new(300.0, 300.0));

    let mut now = 16;
    while button.tick(now) {
        now += 16;
    }
    assert_eq!(button.position(), Point::new(284.0, 300.0));
    assert!(portrait.contains(button.position()));
    assert_eq!(seen.borrow().positions.last(), Some(&Point::new(284.0, 300.0)));
}

#[test]
fn pushed_area_too_small_uses_host_area() {
    let (mut button, _) = button(config());
    button.show().unwrap();
    button.set_screen_bounds(ScreenBounds::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(button.position(), Point::new(150.0, 300.0));
    assert_eq!(
        button.close_target().map(|t| t.center),
        Some(Point::new(200.0, 700.0))
    );
}

#[test]
fn pushed_area_too_small_without_host_area_grows() {
    let seen = Rc::new(RefCell::new(Seen::default()));
    let host = RecordingHost {
        area: None,
        ..RecordingHost::new()
    };
    let mut button = FloatingButton::new(host, config(), recording_callbacks(&seen));
    button.show().unwrap();
    button.set_screen_bounds(ScreenBounds::new(10.0, 10.0, 60.0, 60.0));
    assert_eq!(button.position(), Point::new(10.0, 10.0));
    // The area grew to 10..110 on both axes.
    assert_eq!(
        button.close_target().map(|t| t.center),
        Some(Point::new(60.0, 10.0))
    );
}

#[test]
fn unbounded_host_leaves_button_free() {
    let seen = Rc::new(RefCell::new(Seen::default()));
    let host = RecordingHost {
        area: None,
        ..RecordingHost::new()
    };
    let mut button = FloatingButton::new(host, config(), recording_callbacks(&seen));
    button.show().unwrap();
    drag(&mut button, Point::new(200.0, 350.0), Point::new(2_000.0, 350.0));
    assert_eq!(button.position(), Point::new(1_950.0, 300.0));
    assert_eq!(seen.borrow().disposes, 0);
}

#[test]
fn missing_callbacks_are_no_ops() {
    let mut button = FloatingButton::new(RecordingHost::new(), config(), Callbacks::default());
    button.show().unwrap();
    drag(&mut button, Point::new(200.0, 350.0), Point::new(205.0, 352.0));
    drag(&mut button, Point::new(200.0, 350.0), Point::new(410.0, 350.0));
    assert!(button.is_disposed());
}

#[test]
fn lifecycle_drives_visibility() {
    let (mut button, _) = button(config());
    button.on_lifecycle(Lifecycle::Start).unwrap();
    assert!(button.is_visible());
    button.on_lifecycle(Lifecycle::Stop).unwrap();
    assert!(!button.is_visible());
    button.on_lifecycle(Lifecycle::Start).unwrap();
    button.on_lifecycle(Lifecycle::Destroy).unwrap();
    assert!(button.is_disposed());
    button.on_lifecycle(Lifecycle::Start).unwrap();
    assert!(!button.is_visible());
}

#[derive(Debug, Default)]
struct FakeWindows {
    granted: bool,
    window: Option<Point>,
}

impl WindowService for FakeWindows {
    fn can_draw_overlays(&self) -> bool {
        self.granted
    }

    fn add_window(&mut self, position: Point, _size: Size) -> Result<(), OverlayError> {
        self.window = Some(position);
        Ok(())
    }

    fn remove_window(&mut self) {
        self.window = None;
    }

    fn move_window(&mut self, position: Point) {
        self.window = Some(position);
    }

    fn display_size(&self) -> Size {
        Size::new(1080.0, 2400.0)
    }

    fn status_bar_height(&self) -> Option<f64> {
        None
    }

    fn density(&self) -> f64 {
        2.0
    }
}

#[test]
fn global_overlay_requires_permission() {
    let host = GlobalOverlay::new(FakeWindows::default());
    let mut button = FloatingButton::new(host, config(), Callbacks::new());

    assert_eq!(button.show(), Err(OverlayError::PermissionDenied));
    assert!(!button.is_visible());
    assert_eq!(button.host().service().window, None);

    button.host_mut().service_mut().granted = true;
    button.show().unwrap();
    assert!(button.is_visible());
    assert_eq!(button.host().service().window, Some(Point::new(150.0, 300.0)));
}

#[test]
fn global_safe_area_estimates_status_bar() {
    let host = GlobalOverlay::new(FakeWindows::default());
    // 24 dp at density 2, plus 16 px padding.
    assert_eq!(
        host.safe_area(Size::new(100.0, 100.0)),
        Some(ScreenBounds::new(16.0, 64.0, 1064.0, 2384.0))
    );
}

#[derive(Debug, Default)]
struct FakeContentView {
    frame: Option<Rect>,
    insets: Option<Insets>,
    overlay: Option<Point>,
}

impl ViewTree for FakeContentView {
    fn add_overlay(&mut self, _size: Size) -> Result<(), OverlayError> {
        if self.frame.is_none() {
            return Err(OverlayError::AttachFailed);
        }
        self.overlay = Some(Point::ZERO);
        Ok(())
    }

    fn remove_overlay(&mut self) {
        self.overlay = None;
    }

    fn visible_frame(&self) -> Option<Rect> {
        self.frame
    }

    fn system_bar_insets(&self) -> Option<Insets> {
        self.insets
    }

    fn density(&self) -> f64 {
        1.0
    }

    fn place(&mut self, position: Point) {
        self.overlay = Some(position);
    }
}

#[test]
fn activity_overlay_uses_insets() {
    let tree = FakeContentView {
        frame: Some(Rect::new(0.0, 0.0, 400.0, 800.0)),
        insets: Some(Insets::new(0.0, 40.0, 0.0, 60.0)),
        overlay: None,
    };
    let mut button = FloatingButton::new(
        ActivityOverlay::new(tree),
        ButtonConfig::default(),
        Callbacks::new(),
    );
    button.show().unwrap();
    // Initial (0, 0) pulled into (16, 56, 384, 724).
    assert_eq!(button.position(), Point::new(16.0, 56.0));
    assert_eq!(button.host().tree().overlay, Some(Point::new(16.0, 56.0)));

    button.hide();
    assert_eq!(button.host().tree().overlay, None);
}

#[test]
fn activity_overlay_falls_back_without_insets() {
    let host = ActivityOverlay::new(FakeContentView {
        frame: Some(Rect::new(0.0, 0.0, 400.0, 800.0)),
        ..FakeContentView::default()
    });
    // Status bar 24 dp, navigation bar 48 dp at density 1, plus 16 px margin.
    assert_eq!(
        host.safe_area(Size::new(100.0, 100.0)),
        Some(ScreenBounds::new(16.0, 40.0, 384.0, 736.0))
    );
}

#[test]
fn activity_attach_failure_propagates() {
    let mut button = FloatingButton::new(
        ActivityOverlay::new(FakeContentView::default()),
        ButtonConfig::default(),
        Callbacks::new(),
    );
    assert_eq!(button.show(), Err(OverlayError::AttachFailed));
    assert!(!button.is_visible());
}
