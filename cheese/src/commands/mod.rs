mod args;
mod check;
mod completions;
mod locales;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use locales::LocalesCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stringcheese_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "stringcheese")]
#[command(version)]
#[command(about = "Generate iOS and Dart localization files from Android string resources")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Locales(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the options and show the resolved configuration
    Check(CheckCommand),

    /// List discovered languages and their output paths
    Locales(LocalesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
