//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reflow text to a fixed width, or list hyphenation points of each word
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List processing modes
    Modes,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        for (name, description) in self.entries() {
            println!("{name:<10} {description}");
        }
    }

    fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ListCommands::Modes => &[
                ("reflow", "Reflow text into width-bounded lines with hyphenation"),
                ("words", "List every hyphenation point of each word"),
            ],
            ListCommands::Formats => &[
                ("text", "Plain text, one output line per line"),
                ("json", "JSON array of lines with metadata"),
                ("markdown", "Fenced Markdown block with a line count"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::try_parse_from([
            "perenos", "process", "-i", "a.txt", "-i", "b.txt", "-s", "40", "-m", "words",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, ["a.txt", "b.txt"]);
                assert_eq!(args.width, Some(40));
                assert_eq!(args.mode, Some(perenos_core::Mode::WordList));
            }
            other => panic!("Should be Process, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["perenos", "process", "-m", "columns"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_commands() {
        let cli = Cli::try_parse_from(["perenos", "list", "modes"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Modes
            }
        ));

        let cli = Cli::try_parse_from(["perenos", "list", "formats"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Formats
            }
        ));
    }

    #[test]
    fn test_list_command_executes() {
        let command = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let result: CliResult<()> = command.execute();
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_surfaces_cli_errors() {
        let cli = Cli::try_parse_from(["perenos", "validate", "-c", "/nonexistent/perenos.toml"])
            .unwrap();
        let err = cli.command.execute().unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_list_entries() {
        let modes: Vec<_> = ListCommands::Modes
            .entries()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(modes, ["reflow", "words"]);
        assert_eq!(ListCommands::Formats.entries().len(), 3);
    }
}
