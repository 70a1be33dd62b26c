//! UI command implementation

use std::path::Path;

use colored::Colorize;
use manifold_fs::CommonPath;
use manifold_manifest::PackageData;
use manifold_ui::UiLibraryResolver;

use crate::error::Result;

/// Run the ui command
///
/// Resolves the project's UI library exactly as synthesis would.
pub fn run_ui(root: &Path, templates: &Path, json: bool) -> Result<()> {
    let paths = CommonPath::new(root, templates)?;
    let package = PackageData::load(&paths)?;
    let resolver = UiLibraryResolver::new(
        paths.project_directory.to_native(),
        paths.static_template_path.to_native(),
    );
    let library = resolver.resolve(&package.dependencies())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&library)?);
        return Ok(());
    }

    println!("{} {}", "Library:".bold(), library.name.to_string().cyan());
    println!("{} {}", "Major version:".bold(), library.major_version);
    println!("{} {}", "Scaffold:".bold(), library.scaffold_path.cyan());
    Ok(())
}
