//! Error types for schema merge operations.
//!
//! One unified error type covers every failure mode of the pipeline:
//! traversal, empty discovery, per-file read and parse, output writing, and
//! configuration loading. Errors are surfaced immediately to the caller;
//! there is no local recovery, retry, or partial-success mode.

use std::path::PathBuf;

use sdl_merge_core::ParseError;
use thiserror::Error;

/// Errors that can occur while discovering, parsing, merging, or writing
/// schema files.
///
/// Every file-scoped variant names the path it failed on, so a caller can
/// tell which input (or which directory of the walk) broke the run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A directory could not be traversed (unreadable, or the root is
    /// missing).
    #[error("failed to traverse '{}': {source}", path.display())]
    Traversal {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The walk finished but matched no files.
    #[error("no files matching '{suffix}' under '{}'", root.display())]
    NoMatches {
        /// Root directory that was walked.
        root: PathBuf,
        /// Suffix pattern that matched nothing.
        suffix: String,
    },

    /// A discovered schema file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A discovered schema file is not valid SDL.
    #[error("failed to parse '{}': {source}", path.display())]
    Syntax {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error, carrying line and column.
        source: ParseError,
    },

    /// The merged output could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Output path that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A configuration file could not be opened or created.
    #[error("failed to access config '{}': {source}", path.display())]
    ConfigIo {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A configuration file could not be parsed or serialized.
    #[error("invalid config: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),
}

impl MergeError {
    /// Returns the path the error is attributed to, when there is one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            MergeError::Traversal { path, .. }
            | MergeError::Read { path, .. }
            | MergeError::Syntax { path, .. }
            | MergeError::Write { path, .. }
            | MergeError::ConfigIo { path, .. } => Some(path),
            MergeError::NoMatches { root, .. } => Some(root),
            MergeError::ConfigFormat(_) => None,
        }
    }
}

/// Convenience alias for results with [`MergeError`].
pub type Result<T> = std::result::Result<T, MergeError>;
