//! Error types for Handbase operations.
//!
//! This module defines [`HandbaseError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - User-input failures (bad command, bad parameter) are ordinary variants,
//!   caught once at the session loop boundary and reported as a single line
//! - Use `anyhow::Error` (via `HandbaseError::Other`) for unexpected errors
//! - No error terminates the session; the loop always reads the next line

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Handbase operations.
#[derive(Debug, Error)]
pub enum HandbaseError {
    /// The input line was blank or whitespace-only.
    #[error("Empty input")]
    EmptyInput,

    /// The command name is not present in the catalog.
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// A required parameter slot received no value.
    #[error("Missing required parameter: --{slot}")]
    MissingParameter { slot: String },

    /// A parameter token could not be converted to the slot's type.
    #[error("Cannot convert '{token}' to {target}")]
    TypeConversion { token: String, target: &'static str },

    /// A catalog factory was handed values that do not match its declared
    /// slot types. This is a programming error in the catalog, not user
    /// input; it fails the command but never the process.
    #[error("Unsupported parameter type: {type_name}")]
    UnsupportedParameterType { type_name: String },

    /// Reading or parsing a hand-history file failed. The underlying
    /// message is surfaced verbatim.
    #[error("Import failed for {path}: {message}")]
    Import { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Handbase operations.
pub type Result<T> = std::result::Result<T, HandbaseError>;
