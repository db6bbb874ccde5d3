// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end behaviour of the raster pipeline, including a custom storage
// backend plugged in through `BufferAccessor`.

use std::cell::Cell;

use strokepad_core::error::{Result, StrokepadError};
use strokepad_core::{BoundingBox, Centroid, NormalizeMode, PipelineConfig};
use strokepad_raster::{
    BufferAccessor, RasterImage, bounding_box, box_blur, centroid, crop_to_bounds, normalize,
    resize_nearest, zero_pad,
};

// =============================================================================
// Custom backend
// =============================================================================

thread_local! {
    static RELEASED: Cell<usize> = const { Cell::new(0) };
}

/// Storage that counts how many times it has been released.
struct TrackedBuffer {
    data: Vec<u16>,
    shape: [usize; 2],
}

impl BufferAccessor<u16> for TrackedBuffer {
    fn init(shape: [usize; 2]) -> Self {
        Self {
            // Deliberately non-zero: callers must not rely on initial contents.
            data: vec![0xAAAA; shape[0] * shape[1]],
            shape,
        }
    }

    fn read(&self, index: usize) -> &u16 {
        &self.data[index]
    }

    fn write(&mut self, index: usize) -> &mut u16 {
        &mut self.data[index]
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn resize(&mut self, shape: [usize; 2]) -> Result<()> {
        if shape[0] * shape[1] != self.data.len() {
            return Err(StrokepadError::ShapeMismatch {
                expected: self.data.len(),
                actual: shape[0] * shape[1],
            });
        }
        self.shape = shape;
        Ok(())
    }
}

impl Drop for TrackedBuffer {
    fn drop(&mut self) {
        RELEASED.with(|r| r.set(r.get() + 1));
    }
}

fn released() -> usize {
    RELEASED.with(Cell::get)
}

#[test]
fn custom_backend_runs_full_pipeline() {
    let mut canvas = RasterImage::<u16, TrackedBuffer>::new(64, 64).unwrap();
    canvas.clear();
    canvas.draw_circle(30, 30, 9);

    let cropped = crop_to_bounds(&canvas).unwrap();
    let small = resize_nearest(&cropped, 10, 10).unwrap();
    let padded = zero_pad(&small, 4, 4).unwrap();
    let blurred = box_blur(&padded).unwrap();

    assert_eq!(blurred.dimensions(), (18, 18));
    assert_eq!(blurred.pixel(0, 0), 0);
    assert!(blurred.pixel(9, 9) > 0);
}

#[test]
fn storage_released_exactly_once() {
    let before = released();
    {
        let img = RasterImage::<u16, TrackedBuffer>::new(8, 8).unwrap();
        let input = img.into_inference_input().unwrap();
        assert_eq!(input.shape(), [1, 64]);
        assert_eq!(released(), before);
    }
    assert_eq!(released(), before + 1);
}

#[test]
fn backend_resize_failure_propagates() {
    let mut img = RasterImage::<u16, TrackedBuffer>::new(4, 4).unwrap();
    img.reshape(2, 2).unwrap();
    // The tracked backend refuses to change its element count.
    assert!(matches!(
        img.into_inference_input(),
        Err(StrokepadError::ShapeMismatch { expected: 16, actual: 4 })
    ));
}

// =============================================================================
// Documented scenarios
// =============================================================================

fn blank(width: usize, height: usize) -> RasterImage<f32> {
    let mut img = RasterImage::new(width, height).unwrap();
    img.clear();
    img
}

#[test]
fn single_foreground_pixel() {
    let mut img = blank(10, 10);
    img[(3, 4)] = 255.0;

    assert_eq!(
        bounding_box(&img).unwrap(),
        BoundingBox {
            x_min: 3,
            y_min: 4,
            x_max: 3,
            y_max: 4
        }
    );
    assert_eq!(centroid(&img).unwrap(), Centroid { x: 3, y: 4 });
}

#[test]
fn line_stops_before_end_column() {
    let mut img = blank(10, 10);
    img.draw_line(0, 0, 5, 0);
    for x in 0..5 {
        assert_eq!(img.pixel(x, 0), 255.0);
    }
    assert_eq!(img.pixel(5, 0), 0.0);
}

#[test]
fn uniform_shrink_keeps_value() {
    let mut img = blank(4, 4);
    img.fill(255.0);
    let out = resize_nearest(&img, 2, 2).unwrap();
    assert!(out.pixels().all(|v| v == 255.0));
}

#[test]
fn blur_of_blank_is_blank() {
    let out = box_blur(&blank(20, 20)).unwrap();
    assert_eq!(out.foreground_count(), 0);
}

// =============================================================================
// Properties over a handful of strokes
// =============================================================================

/// A few stroke shapes drawn the way the touch loop draws them.
fn strokes() -> Vec<RasterImage<f32>> {
    let mut shapes = Vec::new();

    let mut dot = blank(240, 240);
    dot.draw_circle(120, 120, 7);
    shapes.push(dot);

    let mut diagonal = blank(240, 240);
    for step in 0..50 {
        diagonal.draw_circle(60 + 2 * step, 50 + 3 * step, 7);
    }
    shapes.push(diagonal);

    let mut edge = blank(240, 240);
    for x in (0..240).step_by(5) {
        edge.draw_circle(x, 2, 7);
    }
    shapes.push(edge);

    let mut scattered = blank(240, 240);
    for (x, y) in [(30, 200), (210, 40), (100, 100), (180, 220)] {
        scattered.draw_circle(x, y, 5);
    }
    shapes.push(scattered);

    shapes
}

#[test]
fn bounding_box_encloses_all_foreground() {
    for img in strokes() {
        let bbox = bounding_box(&img).unwrap();
        assert!(bbox.x_min <= bbox.x_max);
        assert!(bbox.y_min <= bbox.y_max);
        for y in 0..img.height() {
            for x in 0..img.width() {
                if img.pixel(x, y) > 0.0 {
                    assert!(bbox.contains(x, y), "({x}, {y}) outside {bbox}");
                }
            }
        }
    }
}

#[test]
fn resize_always_hits_requested_size() {
    for img in strokes() {
        for (w, h) in [(28, 28), (20, 20), (13, 41), (1, 1), (480, 3)] {
            let out = resize_nearest(&img, w, h).unwrap();
            assert_eq!(out.width(), w);
            assert_eq!(out.height(), h);
        }
    }
}

#[test]
fn padding_frames_the_source() {
    for img in strokes() {
        let small = resize_nearest(&img, 20, 20).unwrap();
        let padded = zero_pad(&small, 4, 4).unwrap();

        for y in 0..28 {
            for x in 0..28 {
                let in_border = x < 4 || x >= 24 || y < 4 || y >= 24;
                if in_border {
                    assert_eq!(padded.pixel(x, y), 0.0);
                } else {
                    assert_eq!(padded.pixel(x, y), small.pixel(x - 4, y - 4));
                }
            }
        }
        assert_eq!(zero_pad(&small, 0, 0).unwrap(), small);
    }
}

#[test]
fn resampling_leaves_source_untouched() {
    for img in strokes() {
        let snapshot = img.clone();
        let _ = crop_to_bounds(&img).unwrap();
        let _ = resize_nearest(&img, 28, 28).unwrap();
        let _ = zero_pad(&img, 2, 2).unwrap();
        let _ = box_blur(&img).unwrap();
        assert_eq!(img, snapshot);
    }
}

// =============================================================================
// Canvas to classifier input
// =============================================================================

#[test]
fn canvas_to_flat_input() {
    let config = PipelineConfig {
        mode: NormalizeMode::centered_mnist(),
        ..Default::default()
    };

    for img in strokes() {
        let small = normalize(img, &config).unwrap();
        assert_eq!(small.dimensions(), (28, 28));

        let input = small.into_inference_input().unwrap();
        assert_eq!(input.shape(), [1, 784]);
        assert!(input.values().all(|v| (0.0..=255.0).contains(&v)));
    }
}

#[test]
fn blank_canvas_reports_empty_image() {
    let config = PipelineConfig {
        mode: NormalizeMode::centered_mnist(),
        ..Default::default()
    };
    assert!(matches!(
        normalize(blank(240, 240), &config),
        Err(StrokepadError::EmptyImage)
    ));

    // Direct mode has no crop, so a blank canvas still produces an (empty) input.
    let direct = normalize(blank(240, 240), &PipelineConfig::default()).unwrap();
    assert_eq!(direct.foreground_count(), 0);
}
