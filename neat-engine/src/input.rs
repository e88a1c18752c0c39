//! Column input abstraction
//!
//! A column is an ordered list of cells. Cells model the loosely typed values
//! found in data frames and JSON arrays; only text cells can be cleaned.

use crate::error::{EngineError, Result};
use std::fmt;

/// One element of a column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Cell {
    /// Missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
}

impl Cell {
    /// Short name of the cell kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Null => "null",
            Cell::Bool(_) => "bool",
            Cell::Integer(_) => "int",
            Cell::Float(_) => "float",
            Cell::Text(_) => "str",
        }
    }

    /// Borrow the text, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str("null"),
            Cell::Bool(value) => write!(f, "{value}"),
            Cell::Integer(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

/// Ordered sequence of cells
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Column {
    cells: Vec<Cell>,
}

impl Column {
    /// Create a column from cells
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// One text cell per line; `\r\n` endings are accepted
    pub fn from_lines(text: &str) -> Self {
        text.lines().map(Cell::from).collect()
    }

    /// Decode a JSON array of strings, numbers, booleans and nulls
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::Input(format!("expected a JSON array: {e}")))
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the column has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Consume the column
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Borrow every cell as text
    ///
    /// Fails on the first non-text cell, reporting its position.
    pub fn texts(&self) -> Result<Vec<&str>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(position, cell)| {
                cell.as_text().ok_or(EngineError::InvalidElementType {
                    position,
                    found: cell.kind(),
                })
            })
            .collect()
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Column {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<Cell>> FromIterator<T> for Column {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Column {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
