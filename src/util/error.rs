//! Error types for flowcmp.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for flowcmp operations.
pub type FlowCmpResult<T> = std::result::Result<T, FlowCmpError>;

/// Errors that can occur while decoding, comparing or encoding flow data.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlowCmpError {
    /// The leading 4-byte tag is missing or not a recognized format.
    #[error("invalid file type (tag {tag:?})")]
    InvalidFormat { tag: Vec<u8> },
    /// The stream ended before a header field could be read.
    #[error("could not read {field} from header")]
    TruncatedHeader { field: &'static str },
    /// The stream ended before the declared payload was read.
    #[error("incomplete data: expected {expected} bytes, got {got}")]
    TruncatedData { expected: usize, got: usize },
    /// Width or height is non-positive, or the grid size overflows.
    #[error("invalid width or height: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
    /// The two fields being compared have different grid sizes.
    #[error("dimension mismatch: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A sample buffer does not match the declared grid.
    #[error("buffer length mismatch: needed {needed}, got {got}")]
    BufferLength { needed: usize, got: usize },
    /// Reading or writing a file failed.
    #[error("i/o failure: {reason}")]
    Io { reason: String },
    /// Wraps another error with the file it concerns.
    #[error("'{}': {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<FlowCmpError>,
    },
}

impl FlowCmpError {
    /// Attaches the offending file path to this error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        FlowCmpError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, stripping any file context.
    pub fn root(&self) -> &FlowCmpError {
        match self {
            FlowCmpError::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<std::io::Error> for FlowCmpError {
    fn from(err: std::io::Error) -> Self {
        FlowCmpError::Io {
            reason: err.to_string(),
        }
    }
}
