//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use perenos_core::Line;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineData {
    /// Line text as emitted, hyphen included
    pub text: String,
    /// Length in characters
    pub length: usize,
    /// Whether the line ends in an inserted hyphen
    pub hyphenated: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &Line) -> Result<()> {
        self.lines.push(LineData {
            text: line.text.clone(),
            length: line.len(),
            hyphenated: line.hyphenated,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_become_array() {
        let mut buf = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buf);
            formatter.format_line(&Line::new("Над пропеллером кру-", true)).unwrap();
            formatter.format_line(&Line::new("жились.", false)).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<LineData> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "Над пропеллером кру-");
        assert_eq!(parsed[0].length, 20);
        assert!(parsed[0].hyphenated);
        assert_eq!(parsed[1].length, 7);
        assert!(!parsed[1].hyphenated);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buf = Vec::new();
        JsonFormatter::new(&mut buf).finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
