//! Generate config command implementation

use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use perenos_core::{DEFAULT_WIDTH, MIN_WIDTH};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the width and mode to taste");
        println!("2. Validate your configuration:");
        println!("   perenos validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   perenos process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

fn template() -> String {
    format!(
        r#"# perenos configuration
#
# Command-line flags take precedence over values in this file.

[reflow]
# Line width in characters, at least {MIN_WIDTH}
width = {DEFAULT_WIDTH}

# "reflow" wraps text into lines with hyphenation,
# "words" lists every hyphenation point of each word
mode = "reflow"

[output]
# "text", "json" or "markdown"
format = "text"
"#
    )
}
