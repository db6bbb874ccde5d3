// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bounding box and centroid of the strictly positive pixels of a raster.

use strokepad_core::error::{Result, StrokepadError};
use strokepad_core::types::{BoundingBox, Centroid};
use tracing::debug;

use crate::raster::{BufferAccessor, Intensity, RasterImage};

/// Smallest box containing every foreground pixel.
///
/// Returns `EmptyImage` when no pixel is strictly positive.
pub fn bounding_box<T: Intensity, B: BufferAccessor<T>>(
    img: &RasterImage<T, B>,
) -> Result<BoundingBox> {
    let (width, height) = img.dimensions();
    let mut bounds: Option<BoundingBox> = None;

    for x in 0..width {
        for y in 0..height {
            if !img.pixel(x, y).is_foreground() {
                continue;
            }
            bounds = Some(match bounds {
                None => BoundingBox {
                    x_min: x,
                    y_min: y,
                    x_max: x,
                    y_max: y,
                },
                Some(b) => BoundingBox {
                    x_min: b.x_min.min(x),
                    y_min: b.y_min.min(y),
                    x_max: b.x_max.max(x),
                    y_max: b.y_max.max(y),
                },
            });
        }
    }

    let bounds = bounds.ok_or(StrokepadError::EmptyImage)?;
    debug!(%bounds, "bounding box");
    Ok(bounds)
}

/// Truncated mean coordinate of the foreground pixels.
///
/// Returns `EmptyImage` instead of dividing by a zero count.
pub fn centroid<T: Intensity, B: BufferAccessor<T>>(img: &RasterImage<T, B>) -> Result<Centroid> {
    let (width, height) = img.dimensions();
    let mut sum_x: u64 = 0;
    let mut sum_y: u64 = 0;
    let mut count: u64 = 0;

    for x in 0..width {
        for y in 0..height {
            if img.pixel(x, y).is_foreground() {
                sum_x += x as u64;
                sum_y += y as u64;
                count += 1;
            }
        }
    }

    if count == 0 {
        return Err(StrokepadError::EmptyImage);
    }

    let centroid = Centroid {
        x: (sum_x / count) as usize,
        y: (sum_y / count) as usize,
    };
    debug!(x = centroid.x, y = centroid.y, count, "centroid");
    Ok(centroid)
}
