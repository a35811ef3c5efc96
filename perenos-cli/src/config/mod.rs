//! Configuration module

use crate::{commands::process::OutputFormat, error::CliError, input::FileReader};
use anyhow::Result;
use perenos_core::ReflowConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Reflow configuration
    #[serde(default)]
    pub reflow: ReflowConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load and parse a configuration file
    ///
    /// Values are parsed but not validated; see [`CliConfig::validate`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = FileReader::read_text(path)?;
        Self::from_toml(&text)
    }

    /// Check the values against the processing limits
    pub fn validate(&self) -> Result<()> {
        self.reflow.validate().map_err(CliError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perenos_core::Mode;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.reflow.width, 80);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml("[reflow]\nmode = \"word-list\"\n").unwrap();
        assert_eq!(config.reflow.mode, Mode::WordList);
        assert_eq!(config.reflow.width, 80);
    }

    #[test]
    fn test_narrow_width_parses_but_fails_validation() {
        let config = CliConfig::from_toml("[reflow]\nwidth = 12\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("line width 12 is too small"));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = CliConfig::from_toml("[language]\ncode = \"ru\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig {
            reflow: ReflowConfig {
                width: 42,
                mode: Mode::WordList,
            },
            output: OutputConfig {
                format: OutputFormat::Markdown,
            },
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }
}
