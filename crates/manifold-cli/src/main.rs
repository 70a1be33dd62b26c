//! Manifold CLI
//!
//! The command-line interface for synthesizing browser-extension manifests.

mod cli;
mod commands;
mod error;
mod reporter;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.verbose),
        None => {
            println!("{} browser-extension manifest synthesis", "manifold".green().bold());
            println!();
            println!("Run {} for available commands.", "manifold --help".cyan());
            Ok(())
        }
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting
/// to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    if verbose && installed.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn execute_command(cmd: Commands, verbose: bool) -> Result<()> {
    match cmd {
        Commands::Manifest {
            target,
            project,
            compact,
        } => commands::run_manifest(
            &project.root,
            &project.template_root(),
            target,
            compact,
            verbose,
        ),
        Commands::Ui { project, json } => {
            commands::run_ui(&project.root, &project.template_root(), json)
        }
    }
}
