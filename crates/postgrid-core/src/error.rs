//! Error types for Postgrid core.
//!
//! Evaluation never produces these: a bad cell is a `Token::Error` value.
//! Only the file boundary can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving a sheet.
#[derive(Error, Debug)]
pub enum PostgridError {
    #[error("could not open '{}' for reading: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create '{}' for writing: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("could not start evaluation thread: {0}")]
    Thread(#[source] std::io::Error),

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, PostgridError>;
