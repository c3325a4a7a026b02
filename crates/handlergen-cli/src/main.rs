//! handlergen CLI
//!
//! Generates the tool-call handler branches of the Stellar message renderer
//! from the tool registry.

mod cli;
mod commands;
mod error;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Sink;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} failed to initialize logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.manifest.as_deref()),
        None => {
            println!("{} Tool handler generator", "handlergen".green().bold());
            println!();
            println!("Run {} for available commands.", "handlergen --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, manifest: Option<&std::path::Path>) -> Result<()> {
    match cmd {
        Commands::List { category, json } => {
            let registry = commands::load_registry(manifest)?;
            commands::run_list(&registry, category, json)
        }
        Commands::Summary => {
            let registry = commands::load_registry(manifest)?;
            commands::run_summary(&registry)
        }
        Commands::Generate {
            layout,
            output,
            splice,
            block,
            dry_run,
        } => {
            let registry = commands::load_registry(manifest)?;
            let sink = Sink::from_args(output, splice, block);
            commands::run_generate(
                &registry,
                &layout.tools,
                &layout.render_options(),
                &sink,
                dry_run,
            )
        }
        Commands::Check {
            target,
            block,
            layout,
        } => {
            let registry = commands::load_registry(manifest)?;
            commands::run_check(
                &registry,
                &target,
                &block,
                &layout.tools,
                &layout.render_options(),
            )
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "handlergen",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_builtin_registry() {
        let registry = commands::load_registry(None).unwrap();
        assert_eq!(registry.len(), handlergen_registry::BUILTIN_COUNT);
    }

    #[test]
    fn test_load_manifest_registry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.toml");
        fs::write(&path, "read = [\"poolReserves\"]\n").unwrap();

        let registry = commands::load_registry(Some(&path)).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("poolReserves"));
    }

    #[test]
    fn test_load_manifest_duplicate_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.toml");
        fs::write(&path, "read = [\"a\"]\nutility = [\"a\"]\n").unwrap();

        let err = commands::load_registry(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Duplicate tool 'a'"));
    }

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_summary_command() {
        assert!(execute_command(Commands::Summary, None).is_ok());
    }
}
