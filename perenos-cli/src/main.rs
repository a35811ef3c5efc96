//! perenos command-line entry point

use clap::Parser;
use perenos_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
