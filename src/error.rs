//! Errors for the settings-file surface. The simulation core itself has no
//! failure modes.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported settings format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}
