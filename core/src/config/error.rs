//! Error types for settings persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors during settings load/save
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path} after {attempts} attempts")]
    Read {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings file {path} after {attempts} attempts")]
    Write {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize settings in {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize settings")]
    Encode(#[source] serde_json::Error),
}
