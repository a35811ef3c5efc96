//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// Where the text to process comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// Files processed in order as one continuous stream
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// Resolve command-line patterns; no patterns means stdin
    pub fn resolve(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() || patterns == ["-"] {
            return Ok(InputSource::Stdin);
        }
        Ok(InputSource::Files(resolve_patterns(patterns)?))
    }
}

/// Map an input character to what the engine sees
///
/// Each newline becomes a single space and carriage returns are dropped.
pub fn normalize(ch: char) -> Option<char> {
    match ch {
        '\n' => Some(' '),
        '\r' => None,
        other => Some(other),
    }
}
