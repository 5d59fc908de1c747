use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid direction: {0} (expected 'full' or 'limited')")]
    InvalidDirection(String),

    #[error("Invalid image buffer: {0}")]
    InvalidBuffer(String),

    #[error("Failed to decode {}: {reason}", path.display())]
    DecodeFailure { path: PathBuf, reason: String },

    #[error("Failed to encode {}: {reason}", path.display())]
    EncodeFailure { path: PathBuf, reason: String },

    #[error("Already converted, refusing to convert again: {}", .0.display())]
    SuffixGuardViolation(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
