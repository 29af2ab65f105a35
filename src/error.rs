//! Error types for the counter demo.
//!
//! Components themselves cannot fail; everything here comes from the
//! program shell around them (terminal, config file, logging).
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal I/O failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// An explicitly requested config file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Config { path: PathBuf, source: io::Error },

    /// The log subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
