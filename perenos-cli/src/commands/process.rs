//! Process command implementation

use crate::{
    config::CliConfig,
    error::{CliError, CliResult},
    input::{normalize, FileReader, InputSource},
    output::{create_formatter, OutputFormatter},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use perenos_core::{emit_push, Line, Mode, Processor, ReflowConfig};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Line width in characters, at least 20 [default: 80]
    #[arg(short = 's', long, alias = "term-size", value_name = "COLUMNS", env = "PERENOS_WIDTH")]
    pub width: Option<usize>,

    /// Processing mode: `reflow` or `words` [default: reflow]
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one output line per line
    #[default]
    Text,
    /// JSON array of lines with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        // Configuration errors must surface before any input is read
        let (config, format) = self.resolve_config()?;
        let mut processor = Processor::new(&config).map_err(CliError::from)?;
        log::info!("Mode: {}, width: {}", config.mode, config.width);

        let source = InputSource::resolve(&self.input)?;
        let mut formatter = create_formatter(format, self.open_output()?);

        match source {
            InputSource::Stdin => {
                let stdin = io::stdin();
                feed(stdin.lock(), &mut processor, formatter.as_mut())?;
            }
            InputSource::Files(files) => {
                let mut progress = ProgressReporter::new(self.quiet || self.output.is_none());
                progress.init_files(files.len() as u64);

                for path in &files {
                    log::info!("Processing {}", path.display());
                    let reader = FileReader::open(path)?;
                    feed(reader, &mut processor, formatter.as_mut())
                        .with_context(|| format!("Failed to process {}", path.display()))?;
                    progress.file_completed(&path.display().to_string());
                }

                progress.finish();
            }
        }

        let mut lines = Vec::new();
        processor.finish(&mut emit_push(&mut lines));
        write_lines(&mut lines, formatter.as_mut())?;
        formatter.finish()
    }

    /// Merge command-line options over the configuration file and defaults
    pub fn resolve_config(&self) -> Result<(ReflowConfig, OutputFormat)> {
        let file = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let config = ReflowConfig {
            width: self.width.unwrap_or(file.reflow.width),
            mode: self.mode.unwrap_or(file.reflow.mode),
        };
        config.validate().map_err(CliError::from)?;

        Ok((config, self.format.unwrap_or(file.output.format)))
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Feed a reader through the processor one input line at a time
fn feed<R: BufRead>(
    mut reader: R,
    processor: &mut Processor,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    let mut buf = String::new();
    let mut lines = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        if read == 0 {
            return Ok(());
        }

        for ch in buf.chars().filter_map(normalize) {
            processor.step(ch, &mut emit_push(&mut lines));
        }
        write_lines(&mut lines, formatter)?;
    }
}

fn write_lines(lines: &mut Vec<Line>, formatter: &mut dyn OutputFormatter) -> Result<()> {
    for line in lines.drain(..) {
        formatter.format_line(&line)?;
    }
    Ok(())
}
