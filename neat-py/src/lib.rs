//! Python bindings for neat column text cleaning
//!
//! Exposes `to_text`, `to_integer` and `to_special_chr`. Each accepts any
//! iterable of strings; pandas Series come back as Series with the same
//! index and name.

#![allow(non_local_definitions)]

use neat_engine::{Cleaner, EngineError, FilterConfig};
use pyo3::prelude::*;
use std::sync::OnceLock;

mod exceptions;
mod series;

use exceptions::{BindingError, InvalidConfigurationError, NeatError};
use series::{extract_column, extract_keep, rebuild};

static CLEANER: OnceLock<Cleaner> = OnceLock::new();

/// Shared cleaner, so the worker pool is built once per interpreter
fn cleaner() -> Result<&'static Cleaner, BindingError> {
    if let Some(cleaner) = CLEANER.get() {
        return Ok(cleaner);
    }
    let built = Cleaner::new()?;
    Ok(CLEANER.get_or_init(|| built))
}

/// Remove digits and/or punctuation from every element
///
/// `keep` is a str or a list of str whose occurrences are left untouched,
/// `keep_num` is the number of leading digits to preserve; `None` means 0.
#[pyfunction]
#[pyo3(signature = (series, punct=true, keep=None, keep_num=None, digits=true))]
fn to_text<'py>(
    py: Python<'py>,
    series: &Bound<'py, PyAny>,
    punct: bool,
    keep: Option<&Bound<'py, PyAny>>,
    keep_num: Option<i64>,
    digits: bool,
) -> PyResult<Bound<'py, PyAny>> {
    let config = FilterConfig {
        remove_digits: digits,
        remove_punctuation: punct,
        keep: extract_keep(keep)?,
        keep_num: keep_num.unwrap_or(0),
    };
    // Options are rejected before any element is looked at
    let filter = config
        .compile()
        .map_err(|e| BindingError::from(EngineError::from(e)))?;

    let column = extract_column(series)?;
    let cleaner = cleaner()?;
    let output = py
        .allow_threads(|| cleaner.to_text_with(&column, &filter))
        .map_err(BindingError::from)?;

    rebuild(series, output.values)
}

/// Convert numeric-looking strings to integers
///
/// Every non-digit character is dropped before parsing. Elements with no
/// digits become `fallback`, or raise `ValueError` when it is `None`.
#[pyfunction]
#[pyo3(signature = (series, fallback=None))]
fn to_integer<'py>(
    py: Python<'py>,
    series: &Bound<'py, PyAny>,
    fallback: Option<i64>,
) -> PyResult<Bound<'py, PyAny>> {
    let column = extract_column(series)?;
    let cleaner = cleaner()?;
    let output = py
        .allow_threads(|| cleaner.to_integer(&column, fallback))
        .map_err(BindingError::from)?;

    rebuild(series, output.values)
}

/// Keep only the characters that are neither ASCII letters nor digits
#[pyfunction]
fn to_special_chr<'py>(
    py: Python<'py>,
    series: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    let column = extract_column(series)?;
    let cleaner = cleaner()?;
    let output = py
        .allow_threads(|| cleaner.to_special_chars(&column))
        .map_err(BindingError::from)?;

    rebuild(series, output.values)
}

/// Main Python module for neat
#[pymodule]
fn neatpy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    m.add_function(wrap_pyfunction!(to_text, m)?)?;
    m.add_function(wrap_pyfunction!(to_integer, m)?)?;
    m.add_function(wrap_pyfunction!(to_special_chr, m)?)?;

    // Exception classes
    m.add("NeatError", py.get_type::<NeatError>())?;
    m.add(
        "InvalidConfigurationError",
        py.get_type::<InvalidConfigurationError>(),
    )?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
