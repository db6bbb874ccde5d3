// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Strokepad — Inference engine bridge.
//
// Defines the contract between the normalization pipeline and whatever
// evaluates the classifier (a compiled graph on a microcontroller, a desktop
// runtime, a test double), plus the fallback used when no engine is built in.

pub mod stub;
pub mod traits;

pub use stub::StubEngine;
pub use traits::InferenceEngine;

/// The inference engine compiled into this build.
///
/// No model runtime ships with the crate, so this is always the stub; real
/// engines are handed to the sketchpad directly by the embedding application.
pub fn inference_engine() -> Box<dyn traits::InferenceEngine> {
    Box::new(stub::StubEngine)
}
