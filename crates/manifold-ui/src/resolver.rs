//! Dependency map to scaffold template resolution.

use std::collections::BTreeMap;
use std::path::Path;

use manifold_fs::NormalizedPath;

use crate::error::{Error, Result};
use crate::library::{SupportedLibrary, UiLibrary};
use crate::protocol::ProtocolTable;

/// React releases before 18 share the legacy mount scaffold.
const REACT_LEGACY_SCAFFOLD: &str = "react17";
const REACT_LEGACY_BELOW: u64 = 18;

/// Resolves the UI library of one project.
///
/// Nothing is cached: every call re-reads the dependency map it is given,
/// any local package it references, and the template root.
#[derive(Debug)]
pub struct UiLibraryResolver {
    project_root: NormalizedPath,
    template_root: NormalizedPath,
    protocols: ProtocolTable,
}

impl UiLibraryResolver {
    /// Resolver for the project at `project_root`, checking scaffolds under
    /// `template_root`.
    pub fn new(project_root: impl AsRef<Path>, template_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: NormalizedPath::new(project_root),
            template_root: NormalizedPath::new(template_root),
            protocols: ProtocolTable::with_defaults(),
        }
    }

    /// Replace the override protocol table.
    pub fn with_protocols(mut self, protocols: ProtocolTable) -> Self {
        self.protocols = protocols;
        self
    }

    /// Detect the first supported library declared in `dependencies`.
    pub fn detect(&self, dependencies: &BTreeMap<String, String>) -> Option<SupportedLibrary> {
        let mut declared = SupportedLibrary::ALL
            .into_iter()
            .filter(|library| dependencies.contains_key(library.package_name()));

        let first = declared.next();
        if let Some(first) = first {
            let others: Vec<&str> = declared.map(|l| l.package_name()).collect();
            if !others.is_empty() {
                tracing::debug!(
                    using = %first,
                    ignored = ?others,
                    "multiple UI libraries declared"
                );
            }
        }
        first
    }

    /// Resolve the library and scaffold subtree for `dependencies`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedLibrary`] when no supported library is declared
    ///   or no scaffold exists for the declared major version.
    /// - [`Error::InvalidVersion`] when the specifier carries no version.
    pub fn resolve(&self, dependencies: &BTreeMap<String, String>) -> Result<UiLibrary> {
        let name = self.detect(dependencies).ok_or_else(|| {
            Error::unsupported(format!(
                "none of {} is declared in dependencies",
                SupportedLibrary::supported_names()
            ))
        })?;

        let specifier = dependencies
            .get(name.package_name())
            .map(String::as_str)
            .unwrap_or_default();
        let major_version =
            self.protocols
                .major_version(name.package_name(), specifier, &self.project_root)?;

        if name == SupportedLibrary::React && major_version < REACT_LEGACY_BELOW {
            tracing::debug!(major_version, "using legacy react scaffold");
            return Ok(UiLibrary {
                name,
                scaffold_path: REACT_LEGACY_SCAFFOLD.to_string(),
                major_version,
            });
        }

        let scaffold_path = format!("{}{}", name.package_name(), major_version);
        let scaffold_dir = self.template_root.join(&scaffold_path);
        if !scaffold_dir.is_dir() {
            return Err(Error::unsupported(format!(
                "{} {} has no scaffold at {}",
                name, major_version, scaffold_dir
            )));
        }

        tracing::debug!(library = %name, scaffold = %scaffold_path, "resolved UI library");
        Ok(UiLibrary {
            name,
            scaffold_path,
            major_version,
        })
    }
}
