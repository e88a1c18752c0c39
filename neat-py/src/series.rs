//! Conversion between Python sequences and engine columns

use crate::exceptions::BindingError;
use neat_engine::{Cell, Column};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyList, PyString};
use std::collections::BTreeSet;

/// Read any Python iterable into a column
///
/// `None`, bools, ints and floats become the matching non-text cells so that
/// the engine can report them by position. Reading stops after the first
/// non-text cell, which is the one the engine reports, so an unsupported
/// object further along can never mask it. An unsupported object with only
/// text before it is rejected here.
pub fn extract_column(series: &Bound<'_, PyAny>) -> PyResult<Column> {
    if series.is_instance_of::<PyString>() {
        return Err(PyTypeError::new_err(
            "expected an iterable of str, got a single str",
        ));
    }

    let mut cells = Vec::new();
    for (position, item) in series.try_iter()?.enumerate() {
        let cell = extract_cell(position, &item?)?;
        let is_text = cell.as_text().is_some();
        cells.push(cell);
        if !is_text {
            break;
        }
    }
    Ok(Column::new(cells))
}

fn extract_cell(position: usize, item: &Bound<'_, PyAny>) -> PyResult<Cell> {
    if let Ok(text) = item.downcast::<PyString>() {
        return Ok(Cell::Text(text.to_cow()?.into_owned()));
    }
    if item.is_none() {
        return Ok(Cell::Null);
    }
    // bool before int, Python bools are ints
    if let Ok(flag) = item.downcast::<PyBool>() {
        return Ok(Cell::Bool(flag.is_true()));
    }
    if let Ok(float) = item.downcast::<PyFloat>() {
        return Ok(Cell::Float(float.value()));
    }
    if let Ok(integer) = item.extract::<i64>() {
        return Ok(Cell::Integer(integer));
    }

    let found = item.get_type().name()?.to_string();
    Err(BindingError::UnsupportedElement { position, found }.into())
}

/// Normalize the `keep` argument: a single str or an iterable of str
pub fn extract_keep(keep: Option<&Bound<'_, PyAny>>) -> PyResult<BTreeSet<String>> {
    let Some(keep) = keep else {
        return Ok(BTreeSet::new());
    };
    if keep.is_none() {
        return Ok(BTreeSet::new());
    }
    if let Ok(single) = keep.downcast::<PyString>() {
        return Ok(BTreeSet::from([single.to_cow()?.into_owned()]));
    }

    let mut entries = BTreeSet::new();
    for item in keep.try_iter()? {
        let item = item?;
        let entry = item
            .downcast::<PyString>()
            .map_err(|_| BindingError::InvalidKeep(type_name(&item)))?;
        entries.insert(entry.to_cow()?.into_owned());
    }
    Ok(entries)
}

fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "object".to_string())
}

/// Wrap cleaned values like the input: a Series-like input (anything with an
/// `index` attribute) is rebuilt with its own type, index and name, anything
/// else becomes a list.
pub fn rebuild<'py, T>(original: &Bound<'py, PyAny>, values: Vec<T>) -> PyResult<Bound<'py, PyAny>>
where
    T: IntoPyObject<'py>,
{
    let py = original.py();
    let list = PyList::new(py, values)?;

    if !original.hasattr("index")? {
        return Ok(list.into_any());
    }

    let kwargs = PyDict::new(py);
    kwargs.set_item("index", original.getattr("index")?)?;
    if original.hasattr("name")? {
        kwargs.set_item("name", original.getattr("name")?)?;
    }
    original.get_type().call((list,), Some(&kwargs))
}
