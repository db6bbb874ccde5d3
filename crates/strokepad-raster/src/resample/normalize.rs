// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Normalization pipeline — turns a raw touch canvas into the small fixed-size
// raster the classifier expects.

use strokepad_core::config::{NormalizeMode, PipelineConfig};
use strokepad_core::error::Result;
use tracing::{debug, info, instrument};

use super::ops;
use crate::raster::{BufferAccessor, Intensity, RamBuffer, RasterImage};

/// Resampling chain over a single raster.
///
/// Every step consumes `self` and returns a new `Normalizer` wrapping the
/// freshly allocated result; the previous raster is dropped as soon as the
/// step finishes, which keeps peak memory to two images on small targets.
///
/// ```ignore
/// let input = Normalizer::new(canvas)
///     .crop_to_bounds()?
///     .resize(20, 20)?
///     .pad(4, 4)?
///     .blur()?
///     .into_raster();
/// ```
pub struct Normalizer<T: Intensity, B: BufferAccessor<T> = RamBuffer<T>> {
    image: RasterImage<T, B>,
}

impl<T: Intensity, B: BufferAccessor<T>> Normalizer<T, B> {
    pub fn new(image: RasterImage<T, B>) -> Self {
        Self { image }
    }

    pub fn as_raster(&self) -> &RasterImage<T, B> {
        &self.image
    }

    pub fn into_raster(self) -> RasterImage<T, B> {
        self.image
    }

    pub fn crop_to_bounds(self) -> Result<Self> {
        let image = ops::crop_to_bounds(&self.image)?;
        debug!(width = image.width(), height = image.height(), "Done cropping");
        Ok(Self { image })
    }

    pub fn resize(self, width: usize, height: usize) -> Result<Self> {
        let image = ops::resize_nearest(&self.image, width, height)?;
        debug!(width, height, "Done resizing");
        Ok(Self { image })
    }

    pub fn pad(self, pad_x: usize, pad_y: usize) -> Result<Self> {
        let image = ops::zero_pad(&self.image, pad_x, pad_y)?;
        debug!(pad_x, pad_y, "Done padding");
        Ok(Self { image })
    }

    pub fn blur(self) -> Result<Self> {
        let image = ops::box_blur(&self.image)?;
        debug!("Done blurring");
        Ok(Self { image })
    }
}

/// Run the stages selected by `config.mode` on `canvas`.
///
/// The canvas is consumed; its storage is released once the first stage has
/// produced its output.
#[instrument(skip_all, fields(mode = ?config.mode))]
pub fn normalize<T: Intensity, B: BufferAccessor<T>>(
    canvas: RasterImage<T, B>,
    config: &PipelineConfig,
) -> Result<RasterImage<T, B>> {
    info!(
        from_w = canvas.width(),
        from_h = canvas.height(),
        to_w = config.target_width,
        to_h = config.target_height,
        "Normalizing canvas"
    );

    let normalizer = Normalizer::new(canvas);
    let normalizer = match config.mode {
        NormalizeMode::Direct => {
            normalizer.resize(config.target_width, config.target_height)?
        }
        NormalizeMode::Centered {
            content_width,
            content_height,
            pad_x,
            pad_y,
            blur,
        } => {
            let padded = normalizer
                .crop_to_bounds()?
                .resize(content_width, content_height)?
                .pad(pad_x, pad_y)?;
            if blur { padded.blur()? } else { padded }
        }
    };

    Ok(normalizer.into_raster())
}
