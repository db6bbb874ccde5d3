// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where strokepad keeps its settings between runs.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "strokepad";

/// `$XDG_DATA_HOME/strokepad`, else `$HOME/.local/share/strokepad`.
///
/// The directory is created on first use. Creation failures are logged and
/// otherwise ignored: a missing directory only means no stored config.
pub fn data_dir() -> PathBuf {
    let dir = resolve(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    );
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "cannot create data directory");
    }
    dir
}

fn resolve(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let base = xdg_data_home
        .filter(|p| p.is_absolute())
        .or_else(|| home.map(|h| h.join(".local").join("share")))
        .unwrap_or_else(std::env::temp_dir);
    base.join(APP_DIR)
}

/// Path of a named file inside the data directory.
pub fn data_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
