// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Buffer accessor contract — the narrow interface a raster needs from whatever
// owns the actual numeric storage (a RAM tensor, an inference engine's input
// arena, ...). `RamBuffer` is the default heap-backed implementation.

use strokepad_core::error::{Result, StrokepadError};

use super::intensity::Intensity;

/// Flat single-channel storage with a two-element `[width, height]` shape.
///
/// Indices are row-major flat indices. Implementations may panic on an
/// out-of-range index; rasters only hand them indices inside `shape()`.
pub trait BufferAccessor<T> {
    /// Allocate storage for `shape[0] * shape[1]` elements.
    ///
    /// The product is checked by the caller before this is reached.
    /// Callers must not rely on the initial contents.
    fn init(shape: [usize; 2]) -> Self
    where
        Self: Sized;

    /// Read the element at `index`.
    fn read(&self, index: usize) -> &T;

    /// Mutable access to the element at `index`.
    fn write(&mut self, index: usize) -> &mut T;

    /// Native `[width, height]` of the storage.
    fn shape(&self) -> [usize; 2];

    /// Change the storage shape, e.g. `[1, width * height]` to flatten an
    /// image for inference. Elements keep their flat positions.
    fn resize(&mut self, shape: [usize; 2]) -> Result<()>;

    /// Number of addressable elements.
    fn len(&self) -> usize {
        let [width, height] = self.shape();
        width * height
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Heap-backed storage. Elements start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RamBuffer<T> {
    data: Vec<T>,
    shape: [usize; 2],
}

impl<T: Intensity> RamBuffer<T> {
    /// Wrap an existing vector as `[width, height]` storage.
    pub fn from_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self> {
        let expected = shape[0].checked_mul(shape[1]).ok_or(StrokepadError::ShapeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(StrokepadError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Intensity> BufferAccessor<T> for RamBuffer<T> {
    fn init(shape: [usize; 2]) -> Self {
        Self {
            data: vec![T::ZERO; shape[0] * shape[1]],
            shape,
        }
    }

    #[inline]
    fn read(&self, index: usize) -> &T {
        &self.data[index]
    }

    #[inline]
    fn write(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn resize(&mut self, shape: [usize; 2]) -> Result<()> {
        let len = match shape[0].checked_mul(shape[1]) {
            Some(len) if len > 0 => len,
            _ => return Err(StrokepadError::invalid_dimensions(shape[0], shape[1])),
        };
        self.data.resize(len, T::ZERO);
        self.shape = shape;
        Ok(())
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
