//! The in-memory manifest document.

use crate::capability::CapabilitySet;
use crate::package::BaseFields;
use crate::target::Browser;

/// Everything a schema needs to render a manifest.
///
/// Owned by the [`ManifestFactory`](crate::ManifestFactory) for the length
/// of one synthesis run and never persisted directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    pub browser: Browser,
    pub base: BaseFields,
    pub capabilities: CapabilitySet,
}

impl ManifestDocument {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            base: BaseFields::default(),
            capabilities: CapabilitySet::default(),
        }
    }
}
