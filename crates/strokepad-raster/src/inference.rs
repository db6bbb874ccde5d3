// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Inference hand-off — flattens a raster into the single-row buffer an
// inference engine consumes, transferring ownership of the storage.

use std::marker::PhantomData;

use strokepad_core::error::Result;
use tracing::debug;

use crate::raster::{BufferAccessor, Intensity, RamBuffer, RasterImage};

/// A flattened `1 x N` input vector that owns the storage it came from.
///
/// Produced only by [`RasterImage::into_inference_input`], so the raster that
/// drew into this storage is gone by the time an engine sees it.
#[derive(Debug)]
pub struct InferenceInput<T: Intensity, B: BufferAccessor<T> = RamBuffer<T>> {
    data: B,
    _marker: PhantomData<T>,
}

impl<T: Intensity, B: BufferAccessor<T>> InferenceInput<T, B> {
    /// Always `[1, len]`.
    pub fn shape(&self) -> [usize; 2] {
        self.data.shape()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element `idx` of the vector, or `None` past the end.
    pub fn get(&self, idx: usize) -> Option<T> {
        (idx < self.len()).then(|| *self.data.read(idx))
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |idx| *self.data.read(idx))
    }

    /// Copy out as `f32`, the element type most engines take.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.values().map(Intensity::to_f32).collect()
    }

    /// Hand the storage to its next owner.
    pub fn into_buffer(self) -> B {
        self.data
    }
}

impl<T: Intensity, B: BufferAccessor<T>> RasterImage<T, B> {
    /// Flatten to `1 x (width * height)` for inference, consuming the raster.
    ///
    /// The storage is resized in place, elements keep their row-major order.
    pub fn into_inference_input(self) -> Result<InferenceInput<T, B>> {
        let (width, height) = self.dimensions();
        let len = width * height;
        let mut data = self.into_buffer();
        debug!(width, height, len, "Reshaping for inference");
        data.resize([1, len])?;
        Ok(InferenceInput {
            data,
            _marker: PhantomData,
        })
    }
}
