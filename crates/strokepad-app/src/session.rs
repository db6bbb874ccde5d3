// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sketchpad session — the draw / submit / reset cycle around one canvas.

use std::mem;

use strokepad_bridge::InferenceEngine;
use strokepad_core::error::Result;
use strokepad_core::types::{Prediction, TouchPoint};
use strokepad_core::PipelineConfig;
use strokepad_raster::{RasterImage, normalize};
use tracing::{debug, info, instrument};

/// Outcome of one submitted drawing.
#[derive(Debug)]
pub struct Submission {
    /// ASCII rendering of the normalized classifier input.
    pub preview: String,
    /// The engine's answer, or why it could not give one.
    pub prediction: Result<Prediction>,
}

/// A touch canvas plus the settings used to draw on and normalize it.
pub struct Sketchpad {
    config: PipelineConfig,
    canvas: RasterImage<f32>,
    samples: usize,
}

impl Sketchpad {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let canvas = blank_canvas(&config)?;
        Ok(Self {
            config,
            canvas,
            samples: 0,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn canvas(&self) -> &RasterImage<f32> {
        &self.canvas
    }

    /// Touch samples stamped since the last reset.
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Stamp the brush at `point`. Samples off the canvas are clipped.
    pub fn touch(&mut self, point: TouchPoint) {
        self.canvas
            .draw_circle(point.x, point.y, self.config.brush_radius);
        self.samples += 1;
    }

    /// Wipe the canvas without submitting it.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.samples = 0;
    }

    /// Normalize the current drawing, hand it to `engine`, and start over on
    /// a fresh canvas.
    ///
    /// The canvas is replaced before normalization runs, so the pad is ready
    /// for the next digit even when this returns an error. Normalization
    /// failures (e.g. nothing drawn in centred mode) are returned as `Err`;
    /// engine failures are reported in [`Submission::prediction`].
    #[instrument(skip_all, fields(engine = engine.name(), samples = self.samples))]
    pub fn submit(&mut self, engine: &mut dyn InferenceEngine) -> Result<Submission> {
        let fresh = blank_canvas(&self.config)?;
        let drawing = mem::replace(&mut self.canvas, fresh);
        self.samples = 0;

        let small = normalize(drawing, &self.config)?;
        let preview = small.render_ascii();

        debug!("Reshaping");
        let input = small.into_inference_input()?;

        debug!("Evaluating");
        let prediction = engine.classify(input, &self.config.output_tensor);
        if let Ok(p) = &prediction {
            info!(label = p.label, "Prediction");
        }

        Ok(Submission {
            preview,
            prediction,
        })
    }
}

fn blank_canvas(config: &PipelineConfig) -> Result<RasterImage<f32>> {
    let mut canvas = RasterImage::new(config.canvas_width, config.canvas_height)?;
    canvas.clear();
    Ok(canvas)
}
