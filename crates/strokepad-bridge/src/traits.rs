// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Inference engine contract.

use strokepad_core::error::Result;
use strokepad_core::types::Prediction;
use strokepad_raster::InferenceInput;

/// Evaluates a classifier on a flattened `1 x N` input.
///
/// The engine takes ownership of the input buffer; the pipeline never touches
/// it again. After evaluation the engine reads a single integer label from the
/// output tensor named `output_tensor` (for the stock MNIST graph,
/// `"Prediction/y_pred:0"`).
pub trait InferenceEngine {
    /// Human-readable engine name for logs.
    fn name(&self) -> &str;

    /// Run the graph on `input` and return the label from `output_tensor`.
    fn classify(&mut self, input: InferenceInput<f32>, output_tensor: &str)
        -> Result<Prediction>;
}
