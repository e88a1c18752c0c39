//! Exception hierarchy for Python bindings

use neat_engine::EngineError;
use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyTypeError, PyValueError};
use pyo3::prelude::*;
use thiserror::Error;

create_exception!(
    neatpy,
    NeatError,
    PyException,
    "Base exception for neat errors that have no builtin counterpart."
);
create_exception!(
    neatpy,
    InvalidConfigurationError,
    PyValueError,
    "Raised when a cleaning option is invalid, e.g. a negative keep_num."
);

/// Internal error enum for Rust-side error handling
#[derive(Error, Debug)]
pub enum BindingError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("element at position {position} has unsupported type {found}")]
    UnsupportedElement { position: usize, found: String },

    #[error("keep must be a str or a list of str, got {0}")]
    InvalidKeep(String),
}

impl From<BindingError> for PyErr {
    fn from(err: BindingError) -> PyErr {
        match err {
            BindingError::Engine(engine) => engine_error(engine),
            BindingError::UnsupportedElement { .. } => PyTypeError::new_err(err.to_string()),
            BindingError::InvalidKeep(_) => PyTypeError::new_err(err.to_string()),
        }
    }
}

fn engine_error(err: EngineError) -> PyErr {
    let message = err.to_string();
    match err {
        EngineError::Core(_) => InvalidConfigurationError::new_err(message),
        EngineError::InvalidElementType { .. } => PyTypeError::new_err(message),
        EngineError::UnparseableInteger { .. } => PyValueError::new_err(message),
        EngineError::ThreadPool(_) | EngineError::Input(_) => NeatError::new_err(message),
    }
}
