// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the strokepad-raster crate: brush stamping and the
// full 240x240 -> 28x28 normalization in both modes.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use strokepad_core::{NormalizeMode, PipelineConfig};
use strokepad_raster::{RasterImage, normalize};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A 240x240 canvas with a diagonal stroke of radius-7 brush stamps, roughly
/// what a hand-drawn "1" looks like after the touch driver samples it.
fn stroked_canvas() -> RasterImage<f32> {
    let mut canvas = RasterImage::new(240, 240).expect("canvas");
    canvas.clear();
    for step in 0..60 {
        canvas.draw_circle(90 + step, 40 + 3 * step, 7);
    }
    canvas
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_brush_stamp(c: &mut Criterion) {
    let mut canvas = RasterImage::<f32>::new(240, 240).expect("canvas");
    canvas.clear();

    c.bench_function("draw_circle r=7", |b| {
        b.iter(|| canvas.draw_circle(black_box(120), black_box(120), black_box(7)));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let canvas = stroked_canvas();
    let direct = PipelineConfig::default();
    let centered = PipelineConfig {
        mode: NormalizeMode::centered_mnist(),
        ..Default::default()
    };

    c.bench_function("normalize direct (240x240 -> 28x28)", |b| {
        b.iter(|| {
            let out = normalize(black_box(canvas.clone()), &direct).expect("normalize");
            black_box(out);
        });
    });

    c.bench_function("normalize centered (240x240 -> 28x28)", |b| {
        b.iter(|| {
            let out = normalize(black_box(canvas.clone()), &centered).expect("normalize");
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_brush_stamp, bench_normalize);
criterion_main!(benches);
