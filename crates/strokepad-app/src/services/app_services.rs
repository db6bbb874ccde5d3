// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — resolves the configuration and hands out the
// inference engine.

use std::path::{Path, PathBuf};

use strokepad_bridge::InferenceEngine;
use strokepad_core::error::Result;
use strokepad_core::PipelineConfig;
use tracing::{info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// Everything the replay loop needs besides the touch samples.
pub struct AppServices {
    config: PipelineConfig,
    data_dir: PathBuf,
}

impl AppServices {
    /// Load `explicit_config` if given, else `config.json` from the data
    /// directory, else the defaults.
    ///
    /// An explicitly named config file must load; the data-directory one may
    /// be missing or broken, in which case the defaults are used.
    pub fn init(explicit_config: Option<&Path>) -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = match explicit_config {
            Some(path) => PipelineConfig::load(path)?,
            None => load_config(&dir),
        };

        Ok(Self {
            config,
            data_dir: dir,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Persist the active config into the data directory.
    pub fn save_config(&self) -> Result<()> {
        self.config.save(data_dir::data_file(&self.data_dir, CONFIG_FILE))
    }

    pub fn inference_engine(&self) -> Box<dyn InferenceEngine> {
        let engine = strokepad_bridge::inference_engine();
        info!(engine = engine.name(), "inference engine selected");
        engine
    }
}

fn load_config(dir: &Path) -> PipelineConfig {
    let path = data_dir::data_file(dir, CONFIG_FILE);
    if !path.exists() {
        return PipelineConfig::default();
    }
    match PipelineConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            PipelineConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokepad_core::NormalizeMode;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()), PipelineConfig::default());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(load_config(dir.path()), PipelineConfig::default());
    }

    #[test]
    fn stored_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            mode: NormalizeMode::centered_mnist(),
            ..Default::default()
        };
        config.save(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(load_config(dir.path()), config);
    }
}
