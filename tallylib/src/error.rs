//! Error types for tallylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building sequence views, parsing predicate
/// expressions, or loading input data.
///
/// The counting loops themselves never produce errors: counting is a pure
/// computation, and input contracts are enforced where views and predicates
/// are constructed.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input was not a JSON array of numbers
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// A token in numeric text input did not parse as a number
    #[error("invalid number: '{token}'")]
    InvalidNumber { token: String },

    /// A predicate expression did not parse
    #[error("invalid predicate '{expr}': {message}")]
    InvalidPredicate { expr: String, message: String },

    /// Unknown input format name
    #[error("unknown input format: '{name}'")]
    UnknownFormat { name: String },

    /// An interleaved component buffer had an odd number of components
    #[error("interleaved component buffer has odd length {len}")]
    OddInterleaved { len: usize },

    /// A strided view was requested with stride zero
    #[error("stride must be non-zero")]
    ZeroStride,

    /// A strided view would read outside its backing buffer
    #[error("element position {position} out of bounds for buffer of length {len}")]
    RangeOutOfBounds { position: isize, len: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
