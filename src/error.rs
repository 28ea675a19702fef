use std::io;

use crate::spinner::Severity;

/// Defects in a merged render configuration, reported at start time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown severity mode: {0}")]
    UnknownSeverity(Severity),

    #[error("frames per second must be greater than zero")]
    InvalidFrameRate,

    #[error("unknown color token: {0}")]
    UnknownColor(String),
}

/// Errors returned by spinner lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum SpinnerError {
    #[error("invalid render configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("console write failed: {0}")]
    Io(#[from] io::Error),
}
