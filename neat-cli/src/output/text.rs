//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde_json::Value;
use std::borrow::Cow;
use std::io::Write;

/// Plain text formatter - outputs one value per line
///
/// Line breaks inside a value are written as `\n` and `\r` so that line
/// `i` of the output always belongs to element `i`.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_value(&mut self, _source: &str, _position: usize, value: &Value) -> Result<()> {
        match value {
            Value::String(text) => writeln!(self.writer, "{}", escape_line_breaks(text))?,
            other => writeln!(self.writer, "{other}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('\r', "\\r").replace('\n', "\\n"))
}
