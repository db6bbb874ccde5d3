// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversions between rasters and in-memory `image::GrayImage` buffers, and a
// plain-text dump for inspecting small rasters on a terminal.

use image::{GrayImage, Luma};
use strokepad_core::error::{Result, StrokepadError};

use crate::raster::{BufferAccessor, Intensity, RasterImage};

/// Intensity ramp for `render_ascii`, darkest first.
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

impl<T: Intensity, B: BufferAccessor<T>> RasterImage<T, B> {
    /// Build a raster from an 8-bit grayscale image.
    pub fn from_gray_image(gray: &GrayImage) -> Result<Self> {
        let (width, height) = gray.dimensions();
        let mut img = Self::new(width as usize, height as usize)?;
        for (x, y, Luma([value])) in gray.enumerate_pixels() {
            img[(x as usize, y as usize)] = T::from_f32(f32::from(*value));
        }
        Ok(img)
    }

    /// Copy into an 8-bit grayscale image, clamping to `0..=255`.
    pub fn to_gray_image(&self) -> Result<GrayImage> {
        let (width, height) = self.dimensions();
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(StrokepadError::invalid_dimensions(width, height)),
        };
        Ok(GrayImage::from_fn(w, h, |x, y| {
            let value = self.pixel(x as usize, y as usize).to_f32();
            Luma([value.clamp(0.0, 255.0) as u8])
        }))
    }

    /// One text line per row, one character per pixel, brighter pixels drawn
    /// with denser glyphs. Values are scaled against `INK`.
    pub fn render_ascii(&self) -> String {
        let (width, height) = self.dimensions();
        let ink = T::INK.to_f32();
        let top = (ASCII_RAMP.len() - 1) as f32;

        let mut out = String::with_capacity((width + 1) * height);
        for y in 0..height {
            for x in 0..width {
                let level = (self.pixel(x, y).to_f32() / ink).clamp(0.0, 1.0);
                let glyph = ASCII_RAMP[(level * top).round() as usize];
                out.push(char::from(glyph));
            }
            out.push('\n');
        }
        out
    }
}
