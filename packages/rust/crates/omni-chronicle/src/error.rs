//! Error types for configuration and project loading.
//!
//! The parser, aggregator and search functions never fail; only the layers
//! that touch the filesystem return `ChronicleError`.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for the config and provider layers
#[derive(Error, Debug)]
pub enum ChronicleError {
    /// File I/O error
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid YAML for `ChronicleConfig`
    #[error("Config error in {path}: {source}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },
    /// Project root is missing or not a directory
    #[error("Project root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

impl ChronicleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
