//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use neat_engine::Column;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where a column is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

/// How input text is split into a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// One element per line
    Lines,
    /// A JSON array of values
    Json,
}

impl InputSource {
    /// Read the whole source as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    /// Read the source and decode it into a column
    pub fn read_column(&self, layout: ColumnLayout) -> Result<Column> {
        let text = self.read_text()?;
        match layout {
            ColumnLayout::Lines => Ok(Column::from_lines(&text)),
            ColumnLayout::Json => {
                Column::from_json(&text).with_context(|| format!("Failed to parse {self} as JSON"))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs, where `-` stands for stdin
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<&String>, Vec<&String>) =
        patterns.iter().partition(|p| p.as_str() == "-");

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }

    if !patterns.is_empty() {
        let patterns: Vec<String> = patterns.into_iter().cloned().collect();
        sources.extend(
            resolve_patterns(&patterns)?
                .into_iter()
                .map(InputSource::File),
        );
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stdin_marker() {
        let sources = resolve_inputs(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
        assert_eq!(sources[0].to_string(), "<stdin>");
    }

    #[test]
    fn test_read_column_layouts() {
        let temp_dir = TempDir::new().unwrap();
        let lines = temp_dir.path().join("col.txt");
        let json = temp_dir.path().join("col.json");
        fs::write(&lines, "a1\nb2\n").unwrap();
        fs::write(&json, r#"["a1", 2]"#).unwrap();

        let column = InputSource::File(lines)
            .read_column(ColumnLayout::Lines)
            .unwrap();
        assert_eq!(column.len(), 2);

        let column = InputSource::File(json)
            .read_column(ColumnLayout::Json)
            .unwrap();
        assert_eq!(column.cells()[1], neat_engine::Cell::Integer(2));
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = InputSource::File(PathBuf::from("/nonexistent/column.txt"))
            .read_text()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xE9]).unwrap();

        assert!(InputSource::File(path).read_text().is_err());
    }

    #[test]
    fn test_invalid_json_reports_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        let err = InputSource::File(path)
            .read_column(ColumnLayout::Json)
            .unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
