/*!
 * Error types for the granthika application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing a WebVTT caption file
#[derive(Error, Debug)]
pub enum VttError {
    /// The file does not start with the WEBVTT signature
    #[error("missing WEBVTT header")]
    MissingHeader,

    /// A cue timing line is present but cannot be parsed
    #[error("bad cue timing at line {line}: {text}")]
    BadTimestamp {
        /// 1-based line number in the source content
        line: usize,
        /// The offending line, verbatim
        text: String,
    },

    /// The file could not be read at all
    #[error("unreadable file: {0}")]
    Read(#[from] std::io::Error),
}

/// Errors that can occur during a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A source file could not be parsed into cues.
    /// Recovered per file: an error placeholder section is emitted in its place.
    #[error("malformed caption file {file}: {source}")]
    MalformedInput {
        /// File name of the offending source
        file: String,
        /// Underlying parse error
        #[source]
        source: VttError,
    },

    /// No caption files matched in the input directory. Fatal for the run.
    #[error("no caption files found in {0}")]
    NoInputFound(String),

    /// Error from a file operation
    #[error("file error: {0}")]
    File(String),

    /// Any other error
    #[error("unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for ConvertError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
