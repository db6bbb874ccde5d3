// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resampling module — crop, resize, pad and blur, plus the normalizer that
// chains them into a classifier input.

pub mod normalize;
pub mod ops;

pub use normalize::{Normalizer, normalize};
pub use ops::{BLUR_MARGIN, box_blur, crop_to_bounds, resize_nearest, zero_pad};
