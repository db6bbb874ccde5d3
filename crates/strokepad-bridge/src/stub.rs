// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub engine for builds without a model runtime.
//
// Every call returns `EngineUnavailable` after releasing the input buffer.

use strokepad_core::error::{Result, StrokepadError};
use strokepad_core::types::Prediction;
use strokepad_raster::InferenceInput;

use crate::traits::InferenceEngine;

/// No-op engine returned when nothing better is available.
pub struct StubEngine;

impl InferenceEngine for StubEngine {
    fn name(&self) -> &str {
        "stub"
    }

    fn classify(
        &mut self,
        input: InferenceInput<f32>,
        output_tensor: &str,
    ) -> Result<Prediction> {
        tracing::warn!(
            len = input.len(),
            output_tensor,
            "InferenceEngine::classify called on stub engine"
        );
        Err(StrokepadError::EngineUnavailable)
    }
}
