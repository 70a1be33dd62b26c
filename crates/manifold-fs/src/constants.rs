//! Conventional file and directory names inside an extension project.

use std::path::Path;

/// Standard project markers and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The package descriptor (`package.json`)
    PackageFile,
    /// The working/output directory (`.manifold`)
    DotDir,
    /// Optional source root (`src`)
    SourceDir,
    /// Directory of extra content scripts (`contents`)
    ContentsDir,
    /// Directory of extension tab pages (`tabs`)
    TabsDir,
    /// Synthesized manifest (`manifest.json`)
    ManifestFile,
    /// Environment declaration file (`index.d.ts`)
    EnvDeclaration,
    /// Framework version marker (`framework-version`)
    VersionFile,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PackageFile => "package.json",
            Self::DotDir => ".manifold",
            Self::SourceDir => "src",
            Self::ContentsDir => "contents",
            Self::TabsDir => "tabs",
            Self::ManifestFile => "manifest.json",
            Self::EnvDeclaration => "index.d.ts",
            Self::VersionFile => "framework-version",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content-script entry candidates, highest priority first.
pub const CONTENT_INDEX_CANDIDATES: &[&str] =
    &["content.ts", "content.tsx", "content.js", "content.jsx"];

/// Background entry candidates, highest priority first.
pub const BACKGROUND_INDEX_CANDIDATES: &[&str] = &["background.ts", "background.js"];

/// Lockfiles that identify the package manager, checked in order.
pub const LOCKFILES: &[(&str, &str)] = &[
    ("pnpm-lock.yaml", "pnpm"),
    ("yarn.lock", "yarn"),
    ("package-lock.json", "npm"),
];
