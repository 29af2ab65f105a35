//! Tracing setup.
//!
//! The terminal UI owns stdout, so events are only written when a log file
//! is requested. Filtering follows `RUST_LOG` (default: info).

use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::Logging(format!("{}: {source}", path.display())))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
