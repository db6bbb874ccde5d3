// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Single-channel pixel element types.

use std::fmt::Debug;

/// A non-negative single-channel intensity.
///
/// `INK` is the value drawing primitives write (255 for every type, matching
/// an 8-bit canvas). Blur arithmetic goes through `f32`; `from_f32` truncates
/// toward zero and saturates for integer types.
pub trait Intensity: Copy + PartialOrd + Debug + 'static {
    const ZERO: Self;
    const INK: Self;

    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;

    /// Strictly positive pixels are foreground.
    #[inline]
    fn is_foreground(self) -> bool {
        self > Self::ZERO
    }
}

macro_rules! impl_intensity {
    ($($ty:ty => $zero:expr, $ink:expr);* $(;)?) => {
        $(
            impl Intensity for $ty {
                const ZERO: Self = $zero;
                const INK: Self = $ink;

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn from_f32(value: f32) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_intensity! {
    u8 => 0, 255;
    u16 => 0, 255;
    i32 => 0, 255;
    f32 => 0.0, 255.0;
}
