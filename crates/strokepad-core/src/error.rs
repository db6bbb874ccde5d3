// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Strokepad.

use thiserror::Error;

/// Top-level error type for all Strokepad operations.
#[derive(Debug, Error)]
pub enum StrokepadError {
    // -- Geometry errors --
    #[error("image has no foreground pixels")]
    EmptyImage,

    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Inference --
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("no inference engine available on this build")]
    EngineUnavailable,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StrokepadError {
    /// Build an `InvalidDimensions` error from any pair of signed or unsigned sizes.
    pub fn invalid_dimensions(width: impl TryInto<i64>, height: impl TryInto<i64>) -> Self {
        Self::InvalidDimensions {
            width: width.try_into().unwrap_or(i64::MAX),
            height: height.try_into().unwrap_or(i64::MAX),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, StrokepadError>;
