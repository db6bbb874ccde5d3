// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — buffer contract, pixel types, the raster image and its
// drawing primitives.

pub mod buffer;
pub mod draw;
pub mod image;
pub mod intensity;

pub use buffer::{BufferAccessor, RamBuffer};
pub use self::image::RasterImage;
pub use intensity::Intensity;
