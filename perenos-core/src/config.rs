//! Processor configuration

use crate::error::{ReflowError, Result};
use core::fmt;
use core::str::FromStr;

/// Narrowest supported line width
pub const MIN_WIDTH: usize = 20;

/// Line width used when none is configured
pub const DEFAULT_WIDTH: usize = 80;

/// Shortest word that may be hyphenated
pub const MIN_WORD_LEN: usize = 4;

/// Character inserted at a split point
pub const HYPHEN: char = '-';

/// Processing mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Mode {
    /// Reflow text into width-bounded lines
    #[default]
    Reflow,
    /// List every hyphenation point of each word
    #[cfg_attr(feature = "serde", serde(rename = "words", alias = "word-list"))]
    WordList,
}

impl Mode {
    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Reflow => "reflow",
            Mode::WordList => "words",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ReflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reflow" | "text" | "0" => Ok(Mode::Reflow),
            "words" | "word-list" | "word" | "1" => Ok(Mode::WordList),
            other => Err(ReflowError::InvalidMode(other.to_string())),
        }
    }
}

/// Configuration shared by both processing modes
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReflowConfig {
    /// Target line width in characters
    pub width: usize,
    /// Processing mode
    pub mode: Mode,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            mode: Mode::Reflow,
        }
    }
}

impl ReflowConfig {
    /// Create a reflow configuration with the given width
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Start a builder
    pub fn builder() -> ReflowConfigBuilder {
        ReflowConfigBuilder::new()
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            return Err(ReflowError::WidthTooSmall {
                width: self.width,
                min: MIN_WIDTH,
            });
        }
        Ok(())
    }
}

/// Builder for [`ReflowConfig`]
#[derive(Debug, Default)]
pub struct ReflowConfigBuilder {
    config: ReflowConfig,
}

impl ReflowConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line width
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Set the mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ReflowConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
