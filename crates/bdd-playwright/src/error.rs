//! Error types for feature processing.
//!
//! [`DocumentError`] is scoped to a single feature file and never stops a
//! batch. [`GeneratorError`] covers environment failures that end the run.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while processing one feature document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The feature file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the feature file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The generated test module could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Failure that aborts a generation run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The input directory could not be created or listed.
    #[error("failed to access input directory {}: {source}", .path.display())]
    InputDir {
        /// Directory that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
