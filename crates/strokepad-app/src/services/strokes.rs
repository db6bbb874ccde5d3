// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recorded touch samples.
//
// A recording is a JSON array of `{ "x": .., "y": .. }` objects in the order
// the touch panel reported them, e.g. as captured from the device's serial
// log.

use std::path::Path;

use strokepad_core::error::Result;
use strokepad_core::types::TouchPoint;
use tracing::{info, instrument};

/// Load a recording from disk.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<TouchPoint>> {
    let data = std::fs::read_to_string(path.as_ref())?;
    let samples = parse_samples(&data)?;
    info!(samples = samples.len(), "Touch recording loaded");
    Ok(samples)
}

pub fn parse_samples(json: &str) -> Result<Vec<TouchPoint>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokepad_core::error::StrokepadError;

    #[test]
    fn parses_point_list() {
        let samples = parse_samples(r#"[{"x": 10, "y": 20}, {"x": -3, "y": 241}]"#).unwrap();
        assert_eq!(samples, vec![TouchPoint::new(10, 20), TouchPoint::new(-3, 241)]);
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        assert!(matches!(
            parse_samples(r#"[{"x": 10}]"#),
            Err(StrokepadError::Serialization(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seven.json");
        std::fs::write(&path, r#"[{"x": 1, "y": 2}]"#).unwrap();
        assert_eq!(load_samples(&path).unwrap(), vec![TouchPoint::new(1, 2)]);
    }
}
