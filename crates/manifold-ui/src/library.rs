//! Supported UI libraries and the resolved library record.

use std::fmt;

use serde::Serialize;

/// Front-end libraries Manifold can scaffold, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLibrary {
    React,
    Svelte,
    Vue,
}

impl SupportedLibrary {
    /// Every supported library. Detection takes the first declared one.
    pub const ALL: [SupportedLibrary; 3] = [Self::React, Self::Svelte, Self::Vue];

    /// Package name as it appears in the dependency map.
    pub fn package_name(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Svelte => "svelte",
            Self::Vue => "vue",
        }
    }

    /// Source extensions that UI pages for this library are authored in,
    /// highest priority first.
    pub fn page_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::React => &["tsx", "jsx"],
            Self::Svelte => &["svelte"],
            Self::Vue => &["vue"],
        }
    }

    /// Comma-separated list of supported package names.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|l| l.package_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SupportedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_name())
    }
}

/// A resolved UI library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiLibrary {
    pub name: SupportedLibrary,
    /// Template subtree key, e.g. `react18` or the legacy `react17`.
    pub scaffold_path: String,
    pub major_version: u64,
}
