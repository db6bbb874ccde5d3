// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core value types for Strokepad.

use serde::{Deserialize, Serialize};

/// Smallest axis-aligned rectangle containing every foreground pixel.
///
/// All four bounds are inclusive pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: usize,
    pub y_min: usize,
    pub x_max: usize,
    pub y_max: usize,
}

impl BoundingBox {
    /// Whether `(x, y)` lies inside the box (edges included).
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}

/// Truncated mean position of all foreground pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: usize,
    pub y: usize,
}

/// Logical width/height override layered over a buffer's native shape.
///
/// Used after the backing storage has been resized for a different view (for
/// example flattened to `1 x N` for inference) while callers still want to
/// address it as a 2D grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalShape {
    dims: Option<(usize, usize)>,
}

impl LogicalShape {
    /// No override: dimensions come from the backing storage.
    pub const NATIVE: Self = Self { dims: None };

    /// Override the reported dimensions with `width` x `height`.
    pub fn overridden(width: usize, height: usize) -> Self {
        Self {
            dims: Some((width, height)),
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.dims.is_some()
    }

    /// The override, if one is set.
    pub fn dims(&self) -> Option<(usize, usize)> {
        self.dims
    }

    /// Resolve to `(width, height)`, preferring the override over `native`.
    pub fn resolve(&self, native: [usize; 2]) -> (usize, usize) {
        self.dims.unwrap_or((native[0], native[1]))
    }
}

/// A single touch sample in canvas coordinates.
///
/// Coordinates are signed because touch panels can report points slightly
/// outside the drawable area; drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

impl TouchPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Class label read back from the inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: i32,
}

impl Prediction {
    /// The label as a single display character ('0'..='9'), if it is a digit.
    pub fn as_digit(&self) -> Option<char> {
        u32::try_from(self.label)
            .ok()
            .and_then(|label| char::from_digit(label, 10))
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
