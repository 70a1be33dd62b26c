//! Manifest command implementation

use std::path::Path;

use colored::Colorize;
use manifold_core::{DefaultHooks, SynthesisOptions, create_manifest};
use manifold_fs::CommonPath;
use manifold_manifest::TargetData;

use crate::error::Result;
use crate::reporter::ConsoleReporter;

/// Run the manifest command
///
/// Synthesizes the manifest for `target` and prints the enabled
/// capabilities.
pub fn run_manifest(
    root: &Path,
    templates: &Path,
    target: TargetData,
    compact: bool,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Creating {} manifest...",
        "=>".blue().bold(),
        target.to_string().cyan()
    );

    let paths = CommonPath::new(root, templates)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let reporter = ConsoleReporter::new(verbose);
    let report = runtime.block_on(create_manifest(
        paths,
        target,
        &DefaultHooks::new(),
        &reporter,
        SynthesisOptions { pretty: !compact },
    ))?;

    let factory = &report.factory;
    if let Some(library) = factory.ui_library() {
        println!(
            "   {} {} ({})",
            "UI".dimmed(),
            library.name,
            library.scaffold_path.cyan()
        );
    }
    for capability in factory.capabilities().enabled() {
        println!("   {} {}", "+".green(), capability);
    }

    println!(
        "{} Manifest written to {}",
        "OK".green().bold(),
        factory.common_path().manifest_path().as_str().cyan()
    );
    Ok(())
}
