// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Short, friendly error messages for the sketchpad display.
//
// Every technical error is mapped to one line of plain English plus a
// suggestion. The severity drives how the app presents it.

use crate::error::StrokepadError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Retrying the same action may succeed.
    Transient,
    /// The user must do something first (usually: draw something).
    ActionRequired,
    /// A build, configuration or programming fault; retrying will not help.
    Permanent,
}

/// A human-readable error with a plain English message and a suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether the app may simply try again.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `StrokepadError` into something a person at the touchscreen can act on.
pub fn humanize_error(err: &StrokepadError) -> HumanError {
    match err {
        StrokepadError::EmptyImage => HumanError {
            message: "Nothing was drawn.".into(),
            suggestion: "Draw a digit on the screen, then press the button.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        StrokepadError::InvalidDimensions { width, height } => HumanError {
            message: "The drawing is too small to read.".into(),
            suggestion: format!("Draw a bigger digit and try again. (Size: {width}x{height})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        StrokepadError::OutOfBounds { .. } | StrokepadError::ShapeMismatch { .. } => HumanError {
            message: "Something went wrong while preparing the drawing.".into(),
            suggestion: format!("Clear the screen and start again. ({err})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        StrokepadError::Config(detail) => HumanError {
            message: "The settings file is not valid.".into(),
            suggestion: format!("Fix or delete config.json to restore the defaults. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        StrokepadError::Inference(detail) => HumanError {
            message: "The digit could not be recognised.".into(),
            suggestion: format!("Try drawing it again. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        StrokepadError::EngineUnavailable => HumanError {
            message: "Digit recognition is not available on this device.".into(),
            suggestion: "The normalized drawing is still shown.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        StrokepadError::Io(io_err) => HumanError {
            message: "A file could not be read or written.".into(),
            suggestion: format!("Check the file exists and is readable. ({io_err})"),
            retriable: true,
            severity: Severity::Transient,
        },

        StrokepadError::Serialization(detail) => HumanError {
            message: "A file has an unexpected format.".into(),
            suggestion: format!("Check the JSON syntax. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
