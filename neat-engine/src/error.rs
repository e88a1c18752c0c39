//! Engine error types

use neat_core::CoreError;
use thiserror::Error;

/// Errors raised while cleaning a column
///
/// Every error aborts the whole call; no partial output is produced.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid filter configuration
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A cell that is not a string reached a string operation
    #[error("element at position {position} is {found}, expected a string")]
    InvalidElementType {
        /// Zero-based position in the column
        position: usize,
        /// Kind of value actually found
        found: &'static str,
    },

    /// No integer could be extracted and no fallback was given
    #[error("element at position {position} ({value:?}) contains no integer")]
    UnparseableInteger {
        /// Zero-based position in the column
        position: usize,
        /// The offending text
        value: String,
    },

    /// Worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Column could not be decoded
    #[error("invalid input: {0}")]
    Input(String),
}

impl EngineError {
    /// True for configuration errors, which are raised before any element is touched
    pub fn is_configuration(&self) -> bool {
        matches!(self, EngineError::Core(_) | EngineError::ThreadPool(_))
    }

    /// Column position the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            EngineError::InvalidElementType { position, .. }
            | EngineError::UnparseableInteger { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
