//! CLI argument parsing using clap derive

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use manifold_manifest::TargetData;

/// Scaffold templates in the source tree, used when running from a checkout.
pub const SOURCE_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates/static");

/// Template locations searched next to an installed binary, relative to
/// the directory holding the executable.
const INSTALLED_TEMPLATES: &[&str] = &["templates/static", "../share/manifold/templates/static"];

/// Manifold - Synthesize browser-extension manifests from your source tree
#[derive(Parser, Debug)]
#[command(name = "manifold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synthesize the extension manifest
    ///
    /// Discovers entrypoints, scaffolds UI pages and writes
    /// .manifold/manifest.json.
    ///
    /// Examples:
    ///   manifold manifest                      # chrome-mv3 in the current directory
    ///   manifold manifest -t firefox-mv2       # Firefox, manifest V2
    ///   manifold manifest --root ./ext --compact
    Manifest {
        /// Target as <browser>-<mv2|mv3>
        #[arg(short, long, env = "MANIFOLD_TARGET", default_value = "chrome-mv3", value_parser = parse_target)]
        target: TargetData,

        #[command(flatten)]
        project: ProjectArgs,

        /// Write the JSON without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Show the UI library and scaffold the project resolves to
    Ui {
        #[command(flatten)]
        project: ProjectArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Where the project and the scaffold templates live
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProjectArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Scaffold template root
    ///
    /// Defaults to the templates installed next to the binary, then to the
    /// source checkout the binary was built from. Set this when neither
    /// exists.
    #[arg(long, env = "MANIFOLD_TEMPLATES")]
    pub templates: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn template_root(&self) -> PathBuf {
        match &self.templates {
            Some(templates) => templates.clone(),
            None => bundled_templates(std::env::current_exe().ok().as_deref()),
        }
    }
}

/// First installed template directory beside `exe`, else the source tree.
fn bundled_templates(exe: Option<&Path>) -> PathBuf {
    exe.and_then(Path::parent)
        .and_then(|dir| {
            INSTALLED_TEMPLATES
                .iter()
                .map(|relative| dir.join(relative))
                .find(|candidate| candidate.is_dir())
        })
        .unwrap_or_else(|| PathBuf::from(SOURCE_TEMPLATES))
}

fn parse_target(s: &str) -> Result<TargetData, manifold_manifest::Error> {
    s.parse()
}
