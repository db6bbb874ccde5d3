// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Normalization pipeline configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrokepadError};

/// How the raw canvas is turned into the classifier input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizeMode {
    /// Resize the whole canvas straight to the target size.
    #[default]
    Direct,
    /// Crop to the strokes, resize to the content size, zero-pad out to the
    /// target size and optionally blur.
    Centered {
        content_width: usize,
        content_height: usize,
        pad_x: usize,
        pad_y: usize,
        blur: bool,
    },
}

impl NormalizeMode {
    /// MNIST-style layout: 20x20 digit centred in a 28x28 frame, blurred.
    pub fn centered_mnist() -> Self {
        Self::Centered {
            content_width: 20,
            content_height: 20,
            pad_x: 4,
            pad_y: 4,
            blur: true,
        }
    }
}

/// Persistent pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Width of the touch canvas in pixels.
    pub canvas_width: usize,
    /// Height of the touch canvas in pixels.
    pub canvas_height: usize,
    /// Radius of the disk stamped at every touch sample.
    pub brush_radius: i32,
    /// Classifier input width.
    pub target_width: usize,
    /// Classifier input height.
    pub target_height: usize,
    /// Stages applied between the canvas and the classifier input.
    pub mode: NormalizeMode,
    /// Name of the output tensor holding the predicted label.
    pub output_tensor: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            canvas_width: 240,
            canvas_height: 240,
            brush_radius: 7,
            target_width: 28,
            target_height: 28,
            mode: NormalizeMode::Direct,
            output_tensor: "Prediction/y_pred:0".into(),
        }
    }
}

impl PipelineConfig {
    /// Check that every size is positive and that a centred layout adds up
    /// to the target size.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(StrokepadError::invalid_dimensions(
                self.canvas_width,
                self.canvas_height,
            ));
        }
        if self.target_width == 0 || self.target_height == 0 {
            return Err(StrokepadError::invalid_dimensions(
                self.target_width,
                self.target_height,
            ));
        }
        if self.brush_radius < 0 {
            return Err(StrokepadError::Config(format!(
                "brush radius must not be negative (got {})",
                self.brush_radius
            )));
        }
        if self.output_tensor.is_empty() {
            return Err(StrokepadError::Config("output tensor name is empty".into()));
        }

        if let NormalizeMode::Centered {
            content_width,
            content_height,
            pad_x,
            pad_y,
            ..
        } = self.mode
        {
            if content_width == 0 || content_height == 0 {
                return Err(StrokepadError::invalid_dimensions(
                    content_width,
                    content_height,
                ));
            }
            let padded_w = padded_extent(content_width, pad_x);
            let padded_h = padded_extent(content_height, pad_y);
            if padded_w != Some(self.target_width) || padded_h != Some(self.target_height) {
                return Err(StrokepadError::Config(format!(
                    "content {content_width}x{content_height} padded by ({pad_x}, {pad_y}) \
                     does not produce the {}x{} target",
                    self.target_width, self.target_height
                )));
            }
        }

        Ok(())
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}

/// `content + 2 * pad`, or `None` if it does not fit in a `usize`.
pub fn padded_extent(content: usize, pad: usize) -> Option<usize> {
    pad.checked_mul(2).and_then(|p| p.checked_add(content))
}
