use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a board
#[derive(Debug, Error)]
pub enum BoardError {
    /// The manifest file could not be read
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the expected layout
    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// No configuration directory is available to look up the default manifest
    #[error("no configuration directory available for the default manifest")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, BoardError>;
