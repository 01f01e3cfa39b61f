//! Error types for the config store

use std::path::PathBuf;
use thiserror::Error;

/// Result type for config store operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Config store error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Backing file exists but could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a JSON object
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Persisting the tree failed; the in-memory mutation is retained
    #[error("failed to write config file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A traversal segment collided with an existing non-mapping value
    #[error("cannot set {path:?}: {segment:?} holds a non-mapping value")]
    Collision { path: String, segment: String },

    /// No value at the given path
    #[error("no value at {path:?}")]
    NotFound { path: String },
}

impl ConfigError {
    /// True when the error left the in-memory tree modified but the backing
    /// file stale.
    pub fn is_stale_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}
