// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resampling operations — crop to content, fixed-point nearest-neighbour
// resize, symmetric zero padding and the centre-weighted box blur. Each one
// reads its input and allocates a new raster of the same backend type.

use strokepad_core::config::padded_extent;
use strokepad_core::error::{Result, StrokepadError};
use tracing::{debug, info, instrument};

use crate::analysis::bounding_box;
use crate::raster::{BufferAccessor, Intensity, RasterImage};

/// Fractional bits of the resize ratio.
const FIXED_SHIFT: u32 = 16;

/// Margin left untouched (zero) by [`box_blur`] on every side.
pub const BLUR_MARGIN: usize = 4;

/// Centre weight of the blur kernel; the eight neighbours weigh 1 each.
const BLUR_CENTER_WEIGHT: f32 = 3.0;
const BLUR_DIVISOR: f32 = 11.0;

/// Crop to the foreground.
///
/// The output is `(x_max - x_min) x (y_max - y_min)` and copies columns
/// `x_min..x_max` and rows `y_min..y_max`: the last foreground column and row
/// are excluded, as the classifier's training data was prepared the same way.
/// An empty canvas fails with `EmptyImage`; content one pixel wide or tall
/// fails with `InvalidDimensions`.
#[instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn crop_to_bounds<T: Intensity, B: BufferAccessor<T>>(
    img: &RasterImage<T, B>,
) -> Result<RasterImage<T, B>> {
    let bounds = bounding_box(img)?;
    info!(%bounds, "Cropping image to bound");

    let crop_w = bounds.x_max - bounds.x_min;
    let crop_h = bounds.y_max - bounds.y_min;
    let mut out = RasterImage::<T, B>::new(crop_w, crop_h)?;

    for i in 0..crop_w {
        for j in 0..crop_h {
            out[(i, j)] = img.pixel(bounds.x_min + i, bounds.y_min + j);
        }
    }

    Ok(out)
}

/// Nearest-neighbour resize to exactly `new_width` x `new_height`.
///
/// Uses a 16.16 fixed-point step `((src << 16) / dst) + 1` per axis and
/// samples source column `(j * x_ratio) >> 16`. The `+ 1` biases sampling
/// slightly to the right/bottom; keep it bit-exact, models were trained on
/// this output.
#[instrument(skip(img), fields(from_w = img.width(), from_h = img.height()))]
pub fn resize_nearest<T: Intensity, B: BufferAccessor<T>>(
    img: &RasterImage<T, B>,
    new_width: usize,
    new_height: usize,
) -> Result<RasterImage<T, B>> {
    let (src_w, src_h) = img.dimensions();
    let mut out = RasterImage::<T, B>::new(new_width, new_height)?;

    let x_ratio = ((src_w as u64) << FIXED_SHIFT) / new_width as u64 + 1;
    let y_ratio = ((src_h as u64) << FIXED_SHIFT) / new_height as u64 + 1;
    debug!(x_ratio, y_ratio, "fixed-point resize ratios");

    for i in 0..new_height {
        let y2 = ((i as u64 * y_ratio) >> FIXED_SHIFT) as usize;
        for j in 0..new_width {
            let x2 = ((j as u64 * x_ratio) >> FIXED_SHIFT) as usize;
            // Only extreme upscales (destination wider than 65536x the
            // source) can step past the last source pixel.
            *out.flat_mut(i * new_width + j) = img.try_pixel(x2, y2)?;
        }
    }

    Ok(out)
}

/// Surround the image with `pad_x` zero columns left and right and `pad_y`
/// zero rows top and bottom.
#[instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn zero_pad<T: Intensity, B: BufferAccessor<T>>(
    img: &RasterImage<T, B>,
    pad_x: usize,
    pad_y: usize,
) -> Result<RasterImage<T, B>> {
    let (width, height) = img.dimensions();
    let (Some(out_w), Some(out_h)) = (padded_extent(width, pad_x), padded_extent(height, pad_y))
    else {
        return Err(StrokepadError::invalid_dimensions(pad_x, pad_y));
    };
    let mut out = RasterImage::<T, B>::new(out_w, out_h)?;
    out.clear();

    for i in 0..width {
        for j in 0..height {
            out[(pad_x + i, pad_y + j)] = img.pixel(i, j);
        }
    }

    Ok(out)
}

/// 3x3 blur with weight 3 on the centre and 1 on each neighbour, divided by 11.
///
/// Only pixels at least [`BLUR_MARGIN`] away from every edge are computed;
/// the margin stays zero. Input is expected to be zero-padded already.
#[instrument(skip(img), fields(width = img.width(), height = img.height()))]
pub fn box_blur<T: Intensity, B: BufferAccessor<T>>(
    img: &RasterImage<T, B>,
) -> Result<RasterImage<T, B>> {
    let (width, height) = img.dimensions();
    let mut out = RasterImage::<T, B>::new(width, height)?;
    out.clear();

    for i in BLUR_MARGIN..width.saturating_sub(BLUR_MARGIN) {
        for j in BLUR_MARGIN..height.saturating_sub(BLUR_MARGIN) {
            let p = |x: usize, y: usize| img.pixel(x, y).to_f32();
            let sum = p(i - 1, j - 1)
                + p(i, j - 1)
                + p(i + 1, j - 1)
                + p(i - 1, j)
                + BLUR_CENTER_WEIGHT * p(i, j)
                + p(i + 1, j)
                + p(i - 1, j + 1)
                + p(i, j + 1)
                + p(i + 1, j + 1);
            out[(i, j)] = T::from_f32(sum / BLUR_DIVISOR);
        }
    }

    Ok(out)
}
