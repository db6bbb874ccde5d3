// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster image — 2D pixel addressing over an owned flat buffer, with an
// optional logical-shape override.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use strokepad_core::error::{Result, StrokepadError};
use strokepad_core::types::LogicalShape;

use super::buffer::{BufferAccessor, RamBuffer};
use super::intensity::Intensity;

/// A single-channel raster that exclusively owns its backing storage.
///
/// Pixel `(x, y)` lives at flat index `y * width + x`. The raster is
/// move-only with respect to its storage: `into_buffer` and
/// `into_inference_input` consume it, so storage can never be reached through
/// two rasters. `Clone` (where the backend allows it) is a deep copy.
///
/// Resampling operations never mutate their input; they allocate a fresh
/// raster with the same backend type.
#[derive(Debug, Clone)]
pub struct RasterImage<T: Intensity, B: BufferAccessor<T> = RamBuffer<T>> {
    data: B,
    shape: LogicalShape,
    _marker: PhantomData<T>,
}

impl<T: Intensity, B: BufferAccessor<T>> RasterImage<T, B> {
    // -- Construction ---------------------------------------------------------

    /// Allocate a `width` x `height` raster.
    ///
    /// The initial contents are whatever the backend's `init` leaves behind;
    /// call [`clear`](Self::clear) when zeroes are required.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(StrokepadError::invalid_dimensions(width, height));
        }
        Ok(Self::from_buffer(B::init([width, height])))
    }

    /// Take ownership of existing storage. Dimensions come from its shape.
    pub fn from_buffer(data: B) -> Self {
        Self {
            data,
            shape: LogicalShape::NATIVE,
            _marker: PhantomData,
        }
    }

    // -- Shape ----------------------------------------------------------------

    /// Logical width: the override if one is set, else the storage's first
    /// shape dimension.
    pub fn width(&self) -> usize {
        self.shape.resolve(self.data.shape()).0
    }

    /// Logical height: the override if one is set, else the storage's second
    /// shape dimension.
    pub fn height(&self) -> usize {
        self.shape.resolve(self.data.shape()).1
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.shape.resolve(self.data.shape())
    }

    pub fn logical_shape(&self) -> LogicalShape {
        self.shape
    }

    /// Report `width` x `height` from now on without touching the storage.
    ///
    /// The new view must fit inside the storage.
    pub fn reshape(&mut self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(StrokepadError::invalid_dimensions(width, height));
        }
        let wanted = width
            .checked_mul(height)
            .ok_or(StrokepadError::invalid_dimensions(width, height))?;
        if wanted > self.data.len() {
            return Err(StrokepadError::ShapeMismatch {
                expected: self.data.len(),
                actual: wanted,
            });
        }
        self.shape = LogicalShape::overridden(width, height);
        Ok(())
    }

    /// Number of pixels in the logical view.
    pub fn len(&self) -> usize {
        let (width, height) = self.dimensions();
        width * height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        let (width, height) = self.dimensions();
        debug_assert!(
            x < width && y < height,
            "pixel ({x}, {y}) outside {width}x{height} raster"
        );
        y * width + x
    }

    // -- Unchecked access -----------------------------------------------------

    /// Read pixel `(x, y)`.
    ///
    /// Bounds are only asserted in debug builds. An out-of-range `x` silently
    /// aliases a pixel on another row in release builds; use [`get`](Self::get)
    /// when the coordinate is not known to be valid.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> T {
        *self.data.read(self.offset(x, y))
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.offset(x, y);
        self.data.write(idx)
    }

    /// Read flat storage element `idx`, bypassing the 2D mapping.
    #[inline]
    pub fn flat(&self, idx: usize) -> T {
        debug_assert!(idx < self.data.len(), "flat index {idx} out of range");
        *self.data.read(idx)
    }

    #[inline]
    pub fn flat_mut(&mut self, idx: usize) -> &mut T {
        debug_assert!(idx < self.data.len(), "flat index {idx} out of range");
        self.data.write(idx)
    }

    // -- Checked access -------------------------------------------------------

    /// Read pixel `(x, y)`, or `None` if it lies outside the logical view.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return None;
        }
        Some(*self.data.read(y * width + x))
    }

    /// Mutable pixel `(x, y)`, or `None` if it lies outside the logical view.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return None;
        }
        Some(self.data.write(y * width + x))
    }

    /// Like [`get`](Self::get) but reports the violation as an error.
    pub fn try_pixel(&self, x: usize, y: usize) -> Result<T> {
        self.get(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Write pixel `(x, y)` after checking it lies inside the logical view.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(self.out_of_bounds(x, y));
        }
        *self.data.write(y * width + x) = value;
        Ok(())
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> StrokepadError {
        let (width, height) = self.dimensions();
        StrokepadError::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    // -- Bulk -----------------------------------------------------------------

    /// Set every pixel of the logical view to zero.
    pub fn clear(&mut self) {
        self.fill(T::ZERO);
    }

    pub fn fill(&mut self, value: T) {
        for idx in 0..self.len() {
            *self.data.write(idx) = value;
        }
    }

    /// Pixels of the logical view in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |idx| *self.data.read(idx))
    }

    /// Number of foreground (strictly positive) pixels.
    pub fn foreground_count(&self) -> usize {
        self.pixels().filter(|p| p.is_foreground()).count()
    }

    // -- Ownership ------------------------------------------------------------

    pub fn buffer(&self) -> &B {
        &self.data
    }

    /// Give up the storage. The raster no longer exists afterwards.
    pub fn into_buffer(self) -> B {
        self.data
    }
}

impl<T: Intensity> RasterImage<T, RamBuffer<T>> {
    /// Build a `width` x `height` raster from row-major pixel values.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(StrokepadError::invalid_dimensions(width, height));
        }
        Ok(Self::from_buffer(RamBuffer::from_vec([width, height], data)?))
    }
}

impl<T: Intensity, B: BufferAccessor<T>> Index<(usize, usize)> for RasterImage<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        self.data.read(self.offset(x, y))
    }
}

impl<T: Intensity, B: BufferAccessor<T>> IndexMut<(usize, usize)> for RasterImage<T, B> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let idx = self.offset(x, y);
        self.data.write(idx)
    }
}

/// Two rasters are equal when their logical views hold the same pixels.
impl<T: Intensity, B: BufferAccessor<T>, C: BufferAccessor<T>> PartialEq<RasterImage<T, C>>
    for RasterImage<T, B>
{
    fn eq(&self, other: &RasterImage<T, C>) -> bool {
        self.dimensions() == other.dimensions() && self.pixels().eq(other.pixels())
    }
}
