mod completions;
mod generate;
mod info;
mod list;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use list::ListCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apidecl_schema::Result<T> {
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
#[command(name = "apidecl")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from apibuilder service specs")]
pub(crate) struct Cli {
    /// Log what the generators are doing (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a generator on an invocation form
    Generate(GenerateCommand),

    /// List available generators
    List(ListCommand),

    /// Show details about one generator
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["apidecl", "generate", "--form", "form.json"]).unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.generator, "ts_declarations");
        assert_eq!(cmd.output, std::path::PathBuf::from("."));
        assert!(!cmd.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["apidecl", "list", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
