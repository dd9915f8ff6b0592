//! Error types for the smile detection library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// `OpenCV` operation failed
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),

    /// Capture device could not be opened
    #[error("Capture device {0} is unavailable")]
    DeviceUnavailable(i32),

    /// Cascade model failed to load or was empty
    #[error("Failed to load cascade model: {path}")]
    ModelLoad {
        /// Path of the cascade file that failed to load
        path: PathBuf,
    },

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Application-specific error type (alias for main Error type)
pub type AppError = Error;

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
