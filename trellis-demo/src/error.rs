//! Demo error types

use std::path::PathBuf;

/// Errors that stop the demo before or during the event loop.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("Failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// No home directory to derive a log path from.
    #[error("No cache directory available; pass --log-file")]
    NoLogDir,

    /// The log file could not be created.
    #[error("Cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The bundled sample users did not parse.
    #[error("Invalid sample data: {0}")]
    SampleData(#[from] serde_json::Error),
}
