// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use floaty_geometry::{CloseTarget, ScreenBounds, constrain, should_dispose};
use kurbo::{Point, Size};

fn grid() -> Vec<Point> {
    (-20..60)
        .flat_map(|i| (-20..120).map(move |j| Point::new(f64::from(i) * 25.0, f64::from(j) * 25.0)))
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let bounds = ScreenBounds::new(16.0, 79.0, 1064.0, 2384.0);
    let size = Size::new(150.0, 150.0);
    let target = CloseTarget::for_bounds(&bounds, 2.75);
    let points = grid();

    c.bench_function("geometry/constrain", |b| {
        b.iter(|| {
            for p in &points {
                black_box(constrain(*p, Some(&bounds), size));
            }
        });
    });

    c.bench_function("geometry/should_dispose", |b| {
        b.iter(|| {
            for p in &points {
                black_box(should_dispose(*p, &bounds, size));
            }
        });
    });

    c.bench_function("geometry/close_target_overlaps", |b| {
        b.iter(|| {
            for p in &points {
                black_box(target.overlaps(*p, size));
            }
        });
    });
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
