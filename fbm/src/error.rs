//! Error types for file-backed matrix access

use std::io;
use std::path::PathBuf;

use fbm_core::FbmError;
use thiserror::Error;

/// Errors from opening or extracting from a file-backed matrix
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Extract(#[from] FbmError),

    #[cfg(feature = "serde")]
    #[error("Invalid descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("Backing file {} too small: need {required} bytes, have {available}", path.display())]
    BackingFileTooSmall {
        path: PathBuf,
        required: u64,
        available: u64,
    },

    #[error("Backing file {} has {actual} data bytes, expected exactly {expected}", path.display())]
    LengthMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type for file-backed matrix operations
pub type Result<T> = std::result::Result<T, Error>;
