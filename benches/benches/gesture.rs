// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use floaty_geometry::{CloseTarget, ScreenBounds};
use floaty_gesture::{DragController, GestureConfig, MovePolicy, TouchSample};
use kurbo::{Point, Size};

fn controller(move_policy: MovePolicy) -> DragController {
    let bounds = ScreenBounds::new(0.0, 0.0, 1080.0, 2400.0);
    let mut drag = DragController::new(
        GestureConfig {
            move_policy,
            ..GestureConfig::default()
        },
        Point::new(500.0, 1200.0),
        Size::new(150.0, 150.0),
    );
    drag.set_screen_bounds(bounds);
    drag.set_close_target(Some(CloseTarget::for_bounds(&bounds, 2.75)));
    drag
}

/// A wandering finger path, one sample per frame.
fn path(len: usize) -> Vec<TouchSample> {
    (0..len)
        .map(|i| {
            let t = i as f64 / 8.0;
            TouchSample::move_to(575.0 + 400.0 * t.sin(), 1275.0 + 900.0 * (t * 0.7).cos())
        })
        .collect()
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/press_move_release");

    // Moves are expected to be O(1) each; this should scale linearly in samples.
    for len in [16usize, 120, 1_000] {
        let samples = path(len);
        group.throughput(Throughput::Elements(len as u64));

        for (name, policy) in [("free", MovePolicy::Free), ("constrained", MovePolicy::Constrained)] {
            group.bench_with_input(BenchmarkId::new(name, len), &samples, |b, samples| {
                b.iter_batched(
                    || controller(policy),
                    |mut drag| {
                        drag.handle(TouchSample::down(575.0, 1275.0));
                        for s in samples {
                            black_box(drag.handle(*s));
                        }
                        black_box(drag.handle(TouchSample::up(0.0, 0.0)));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
