//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use perenos_core::Line;
use std::io::Write;

/// Text formatter - one output line per emitted line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &Line) -> Result<()> {
        writeln!(self.writer, "{}", line.text.trim_end())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            formatter.format_line(&Line::new("жились чайки, а ", false)).unwrap();
            formatter.format_line(&Line::new(" три", false)).unwrap();
            formatter.format_line(&Line::new("кру-", true)).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "жились чайки, а\n три\nкру-\n");
    }
}
