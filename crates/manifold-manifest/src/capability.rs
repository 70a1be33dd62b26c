//! Schema-neutral capability state.
//!
//! A [`CapabilitySet`] records which extension surfaces are enabled and
//! with which parameters. It is the only mutable state behind a manifest:
//! the MV2 and MV3 documents are pure renderings of it. Each capability
//! renders into its own fixed set of top-level keys, so toggles on
//! different capabilities never interfere.

use std::fmt;

use serde::Serialize;

use crate::target::ManifestVersion;

/// UI pages that are mounted from a scaffold template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntrypointKind {
    Popup,
    Options,
    Newtab,
    Devtools,
}

impl EntrypointKind {
    pub const ALL: [EntrypointKind; 4] = [Self::Popup, Self::Options, Self::Newtab, Self::Devtools];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popup => "popup",
            Self::Options => "options",
            Self::Newtab => "newtab",
            Self::Devtools => "devtools",
        }
    }

    /// HTML page the manifest points at.
    pub fn page(&self) -> String {
        format!("{}.html", self.as_str())
    }
}

impl fmt::Display for EntrypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every manifest capability the factory can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    Popup,
    Options,
    Newtab,
    Devtools,
    Background,
    ContentScripts,
    TabPages,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Self::Popup,
        Self::Options,
        Self::Newtab,
        Self::Devtools,
        Self::Background,
        Self::ContentScripts,
        Self::TabPages,
    ];

    /// Top-level manifest keys this capability contributes.
    pub fn owned_keys(&self, version: ManifestVersion) -> &'static [&'static str] {
        match (self, version) {
            (Self::Popup, ManifestVersion::Mv2) => &["browser_action"],
            (Self::Popup, ManifestVersion::Mv3) => &["action"],
            (Self::Options, _) => &["options_ui"],
            (Self::Newtab, _) => &["chrome_url_overrides"],
            (Self::Devtools, _) => &["devtools_page"],
            (Self::Background, _) => &["background"],
            (Self::ContentScripts, _) => &["content_scripts"],
            (Self::TabPages, _) => &["web_accessible_resources"],
        }
    }

    /// Whether `key` belongs to any capability under any schema version,
    /// or is the schema marker itself.
    pub fn is_reserved_key(key: &str) -> bool {
        key == "manifest_version"
            || Self::ALL.iter().any(|c| {
                [ManifestVersion::Mv2, ManifestVersion::Mv3]
                    .into_iter()
                    .any(|v| c.owned_keys(v).contains(&key))
            })
    }
}

impl From<EntrypointKind> for Capability {
    fn from(kind: EntrypointKind) -> Self {
        match kind {
            EntrypointKind::Popup => Self::Popup,
            EntrypointKind::Options => Self::Options,
            EntrypointKind::Newtab => Self::Newtab,
            EntrypointKind::Devtools => Self::Devtools,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Popup => "popup",
            Self::Options => "options",
            Self::Newtab => "newtab",
            Self::Devtools => "devtools",
            Self::Background => "background",
            Self::ContentScripts => "content scripts",
            Self::TabPages => "tab pages",
        };
        f.write_str(name)
    }
}

/// When a content script is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunAt {
    DocumentStart,
    DocumentEnd,
    DocumentIdle,
}

impl RunAt {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "document_start" => Some(Self::DocumentStart),
            "document_end" => Some(Self::DocumentEnd),
            "document_idle" => Some(Self::DocumentIdle),
            _ => None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One `content_scripts` entry. Identical in both schema versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContentScript {
    pub matches: Vec<String>,
    pub js: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_at: Option<RunAt>,
    #[serde(skip_serializing_if = "is_false")]
    pub all_frames: bool,
}

impl ContentScript {
    /// Pattern used when a script declares no `matches`.
    pub const DEFAULT_MATCH: &'static str = "<all_urls>";

    /// Script injected everywhere.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            matches: vec![Self::DEFAULT_MATCH.to_string()],
            js: vec![script.into()],
            run_at: None,
            all_frames: false,
        }
    }
}

/// Enabled capabilities and their parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    pub popup: bool,
    pub options: bool,
    pub newtab: bool,
    pub devtools: bool,
    /// Source-relative background entry.
    pub background: Option<String>,
    /// Primary `content.*` script.
    pub content_script: Option<ContentScript>,
    /// Scripts discovered in the contents directory, sorted by path.
    pub directory_content_scripts: Vec<ContentScript>,
    /// Tab pages (`tabs/<name>.html`), sorted.
    pub tab_pages: Vec<String>,
}

impl CapabilitySet {
    pub fn set_page(&mut self, kind: EntrypointKind, enabled: bool) {
        let slot = match kind {
            EntrypointKind::Popup => &mut self.popup,
            EntrypointKind::Options => &mut self.options,
            EntrypointKind::Newtab => &mut self.newtab,
            EntrypointKind::Devtools => &mut self.devtools,
        };
        *slot = enabled;
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::Popup => self.popup,
            Capability::Options => self.options,
            Capability::Newtab => self.newtab,
            Capability::Devtools => self.devtools,
            Capability::Background => self.background.is_some(),
            Capability::ContentScripts => {
                self.content_script.is_some() || !self.directory_content_scripts.is_empty()
            }
            Capability::TabPages => !self.tab_pages.is_empty(),
        }
    }

    /// Enabled capabilities in declaration order.
    pub fn enabled(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    /// All content-script entries in render order: the primary script
    /// first, then the directory scripts.
    pub fn content_scripts(&self) -> Vec<&ContentScript> {
        self.content_script
            .iter()
            .chain(self.directory_content_scripts.iter())
            .collect()
    }
}
