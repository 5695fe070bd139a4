// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless floating button.
//!
//! Drive a tap, a drag with edge snapping, and a drop on the close target
//! through a logging host.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p floaty_demos --example headless_drag`

use floaty::{ButtonConfig, Callbacks, FloatingButton};
use floaty_demos::{TerminalHost, init_logging};
use floaty_gesture::TouchSample;
use kurbo::{Point, Size};

fn main() {
    init_logging();

    let config = ButtonConfig {
        size: Size::new(120.0, 120.0),
        initial_position: Point::new(800.0, 1000.0),
        snap_to_edge: true,
        margin_from_edge: 20.0,
        ..ButtonConfig::default()
    };
    let callbacks = Callbacks::new()
        .on_click(|| log::info!("clicked"))
        .on_drag(|ev| log::info!("{:?} at {:?}", ev.state, ev.position))
        .on_dispose(|| log::info!("dismissed"));

    let host = TerminalHost::new(Size::new(1080.0, 2400.0), 2.75);
    let mut button = FloatingButton::new(host, config, callbacks);
    if let Err(err) = button.show() {
        log::error!("cannot show button: {err}");
        return;
    }

    // A tap.
    button.on_touch(TouchSample::down(860.0, 1060.0));
    button.on_touch(TouchSample::up(862.0, 1061.0));

    // Drag towards the left half, then let the snap animation run at 60 fps.
    button.on_touch(TouchSample::down(860.0, 1060.0));
    for step in 1..=10 {
        let x = 860.0 - f64::from(step) * 60.0;
        button.on_touch(TouchSample::move_to(x, 1060.0 + f64::from(step) * 10.0));
    }
    button.on_touch(TouchSample::up(260.0, 1160.0));
    let mut now = 0;
    while button.tick(now) {
        now += 16;
    }
    log::info!("settled at {:?}", button.position());

    // Drop it on the close target near the bottom.
    let start = button.position() + Size::new(60.0, 60.0).to_vec2();
    let target = button.close_target().map_or(start, |t| t.center);
    button.on_touch(TouchSample::down(start.x, start.y));
    button.on_touch(TouchSample::move_to(target.x, target.y));
    button.on_touch(TouchSample::up(target.x, target.y));
    log::info!("visible after drop: {}", button.is_visible());
}
