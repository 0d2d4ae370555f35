//! Errors reported by file-backed sources and sinks.
//!
//! The pipeline engine itself has no recoverable errors: a chain either
//! composes (and then every traversal is infallible) or it does not
//! compile. What can fail is acquiring the resources around a chain, and
//! that failure surfaces before the chain is composed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure in a file-backed pipeline collaborator.
#[derive(Debug, Error)]
pub enum Error {
    /// The file backing a source or sink could not be opened.
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Output could not be written or flushed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}
