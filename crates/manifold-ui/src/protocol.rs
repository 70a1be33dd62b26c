//! Version lookup for `protocol:target` dependency overrides.
//!
//! A dependency may be declared as `file:../local-react` or
//! `link:../local-react` instead of a version range. The version is then
//! read from the referenced package's own descriptor. Lookups are keyed by
//! protocol so new override kinds can be registered without touching the
//! resolver.

use std::collections::HashMap;
use std::path::Path;

use manifold_fs::{JsonStore, NormalizedPath};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::version;

/// Strategy that turns the target part of a `protocol:target` specifier
/// into a major version.
pub trait VersionSource: Send + Sync {
    fn major_version(&self, library: &str, target: &str, project_root: &NormalizedPath)
    -> Result<u64>;
}

/// Reads `version` from `<target>/package.json`. A relative target is
/// taken from the project root.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPackageSource;

#[derive(Deserialize)]
struct LocalPackage {
    version: Option<String>,
}

impl VersionSource for LocalPackageSource {
    fn major_version(
        &self,
        library: &str,
        target: &str,
        project_root: &NormalizedPath,
    ) -> Result<u64> {
        let package_dir = if Path::new(target).is_absolute() {
            NormalizedPath::new(target)
        } else {
            project_root.join(target)
        };
        let package_file = package_dir.join("package.json");
        tracing::debug!(path = %package_file, "reading local package version");

        let package: LocalPackage = JsonStore::default().load(&package_file)?;
        let declared = package.version.ok_or_else(|| Error::LocalPackageVersion {
            path: package_file.to_native(),
        })?;

        version::major_version(&declared).map_err(|reason| Error::InvalidVersion {
            library: library.to_string(),
            specifier: declared,
            reason,
        })
    }
}

/// Registry of override protocols.
pub struct ProtocolTable {
    sources: HashMap<String, Box<dyn VersionSource>>,
}

impl ProtocolTable {
    /// Create an empty table. Every override falls back to plain semver.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Table with the local-path protocols (`file`, `link`) registered.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register("file", LocalPackageSource);
        table.register("link", LocalPackageSource);
        table
    }

    /// Register a strategy for `protocol`, replacing any existing one.
    pub fn register(&mut self, protocol: impl Into<String>, source: impl VersionSource + 'static) {
        self.sources.insert(protocol.into(), Box::new(source));
    }

    /// Whether a strategy is registered for `protocol`.
    pub fn contains(&self, protocol: &str) -> bool {
        self.sources.contains_key(protocol)
    }

    /// Resolve the major version of a dependency specifier.
    ///
    /// Specifiers without a protocol, and protocols with no registered
    /// strategy, are read as semantic versions (for an unknown protocol,
    /// the part after the colon).
    pub fn major_version(
        &self,
        library: &str,
        specifier: &str,
        project_root: &NormalizedPath,
    ) -> Result<u64> {
        let plain = match specifier.split_once(':') {
            Some((protocol, target)) => match self.sources.get(protocol) {
                Some(source) => return source.major_version(library, target, project_root),
                None => {
                    tracing::debug!(protocol, "unknown dependency protocol, reading as semver");
                    target
                }
            },
            None => specifier,
        };

        version::major_version(plain).map_err(|reason| Error::InvalidVersion {
            library: library.to_string(),
            specifier: specifier.to_string(),
            reason,
        })
    }
}

impl Default for ProtocolTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ProtocolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut protocols: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        protocols.sort_unstable();
        f.debug_struct("ProtocolTable")
            .field("protocols", &protocols)
            .finish()
    }
}
