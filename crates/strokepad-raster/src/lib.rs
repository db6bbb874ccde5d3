// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// strokepad-raster — Single-channel raster images for touchscreen strokes.
//
// Provides the raster abstraction over externally owned flat storage, stroke
// drawing (line, filled disk), foreground geometry (bounding box, centroid),
// and the resampling pipeline (crop, nearest-neighbour resize, zero padding,
// box blur) that turns a 240x240 canvas into a small classifier input.

pub mod analysis;
pub mod convert;
pub mod inference;
pub mod raster;
pub mod resample;

// Re-export the primary items so callers can use `strokepad_raster::RasterImage` etc.
pub use analysis::{bounding_box, centroid};
pub use inference::InferenceInput;
pub use raster::{BufferAccessor, Intensity, RamBuffer, RasterImage};
pub use resample::{Normalizer, box_blur, crop_to_bounds, normalize, resize_nearest, zero_pad};
