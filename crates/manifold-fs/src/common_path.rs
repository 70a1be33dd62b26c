//! Conventional path layout of an extension project.
//!
//! A project is a directory holding a `package.json` and a set of
//! conventionally named entrypoint files, either at the root or inside an
//! optional `src/` directory. All generated output lands in `.manifold/`.

use std::path::Path;

use crate::constants::{BACKGROUND_INDEX_CANDIDATES, CONTENT_INDEX_CANDIDATES};
use crate::{Error, NormalizedPath, ProjectPath, Result};

/// Resolved absolute paths for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPath {
    /// Canonical project root.
    pub project_directory: NormalizedPath,
    /// `src/` when present, otherwise the project root.
    pub source_directory: NormalizedPath,
    /// Working/output directory (`.manifold`).
    pub dot_directory: NormalizedPath,
    /// Input package descriptor.
    pub package_file_path: NormalizedPath,
    /// Root of the scaffold template subtrees.
    pub static_template_path: NormalizedPath,
    /// Content-script entry candidates in priority order.
    pub content_index_list: Vec<NormalizedPath>,
    /// Background entry candidates in priority order.
    pub background_index_list: Vec<NormalizedPath>,
}

impl CommonPath {
    /// Resolve the layout for `project_root`, using `template_root` for
    /// scaffold templates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProjectNotFound`] when the project root does not exist.
    pub fn new(project_root: impl AsRef<Path>, template_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        let canonical = dunce::canonicalize(project_root).map_err(|_| Error::ProjectNotFound {
            path: project_root.to_path_buf(),
        })?;
        let project_directory = NormalizedPath::new(&canonical);

        let src = project_directory.join(ProjectPath::SourceDir.as_str());
        let source_directory = if src.is_dir() {
            src
        } else {
            project_directory.clone()
        };

        let candidates = |names: &[&str]| {
            names
                .iter()
                .map(|name| source_directory.join(name))
                .collect::<Vec<_>>()
        };
        let content_index_list = candidates(CONTENT_INDEX_CANDIDATES);
        let background_index_list = candidates(BACKGROUND_INDEX_CANDIDATES);

        let static_template_path = dunce::canonicalize(template_root.as_ref())
            .map(NormalizedPath::new)
            .unwrap_or_else(|_| NormalizedPath::new(template_root.as_ref()));

        Ok(Self {
            dot_directory: project_directory.join(ProjectPath::DotDir.as_str()),
            package_file_path: project_directory.join(ProjectPath::PackageFile.as_str()),
            project_directory,
            source_directory,
            static_template_path,
            content_index_list,
            background_index_list,
        })
    }

    /// Output location of the synthesized manifest.
    pub fn manifest_path(&self) -> NormalizedPath {
        self.dot_directory.join(ProjectPath::ManifestFile.as_str())
    }

    /// Output location of the normalized package metadata.
    pub fn package_path(&self) -> NormalizedPath {
        self.dot_directory.join(ProjectPath::PackageFile.as_str())
    }

    /// Output location of the environment declarations.
    pub fn env_declaration_path(&self) -> NormalizedPath {
        self.dot_directory.join(ProjectPath::EnvDeclaration.as_str())
    }

    /// Output location of the framework version marker.
    pub fn version_path(&self) -> NormalizedPath {
        self.dot_directory.join(ProjectPath::VersionFile.as_str())
    }

    /// Directory scanned for additional content scripts.
    pub fn contents_directory(&self) -> NormalizedPath {
        self.source_directory.join(ProjectPath::ContentsDir.as_str())
    }

    /// Directory scanned for tab pages.
    pub fn tabs_directory(&self) -> NormalizedPath {
        self.source_directory.join(ProjectPath::TabsDir.as_str())
    }

    /// Path relative to the source directory, as referenced from the manifest.
    pub fn source_relative(&self, path: &NormalizedPath) -> String {
        path.relative_to(&self.source_directory)
            .unwrap_or_else(|| path.as_str().to_string())
    }
}
