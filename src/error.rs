//! Error types.

use std::path::PathBuf;

/// Rejected line configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineError {
    #[error("Invalid probability for {name}: {value} (must be within [0, 1])")]
    InvalidProbability { name: &'static str, value: f64 },
}

/// Failure while writing sweep results to disk.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Plot error ({}): {message}", path.display())]
    Plot { path: PathBuf, message: String },
}
