//! JSON export of sweep series.
//!
//! Each chart gets a sibling `<name>.json` holding the aligned index/value
//! sequences plus the seed and line parameters that produced them, so a run
//! can be re-plotted or compared without re-simulating.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::simulation::SweepSeries;

/// Path of the chart file for `name` inside `dir`.
pub fn chart_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.svg", name))
}

/// Path of the JSON series file for `name` inside `dir`.
pub fn series_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name))
}

/// Write `series` as pretty JSON, creating parent directories as needed.
pub fn save_series(series: &SweepSeries, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(series)?;
    fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
