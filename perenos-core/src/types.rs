//! Output types

use core::fmt;

/// A finished output line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Line content without any terminator
    pub text: String,
    /// Whether the engine ended this line with an inserted hyphen
    pub hyphenated: bool,
}

impl Line {
    /// Create a new line
    pub fn new(text: impl Into<String>, hyphenated: bool) -> Self {
        Self {
            text: text.into(),
            hyphenated,
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the line has no content
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Line content as a string slice
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Default emit function that pushes to a vector
pub fn emit_push(lines: &mut Vec<Line>) -> impl FnMut(Line) + '_ {
    move |line| lines.push(line)
}
