//! Manifest schemas.
//!
//! Each schema is a pure function from a [`ManifestDocument`] to the JSON
//! manifest of its version. The fields both versions share are rendered
//! here; version-specific regions live in [`mv2`] and [`mv3`].

pub mod mv2;
pub mod mv3;

use std::fmt;

use serde_json::{Map, Value, json};

use crate::capability::EntrypointKind;
use crate::document::ManifestDocument;
use crate::target::ManifestVersion;

pub use mv2::Mv2Schema;
pub use mv3::Mv3Schema;

/// Version-specific manifest rendering.
pub trait ManifestSchema: Send + Sync + fmt::Debug {
    fn version(&self) -> ManifestVersion;

    fn render(&self, document: &ManifestDocument) -> Value;
}

/// Schema implementation for `version`.
pub fn schema_for(version: ManifestVersion) -> Box<dyn ManifestSchema> {
    match version {
        ManifestVersion::Mv2 => Box::new(Mv2Schema),
        ManifestVersion::Mv3 => Box::new(Mv3Schema),
    }
}

/// Render the fields both schema versions share.
fn render_common(document: &ManifestDocument, version: ManifestVersion) -> Map<String, Value> {
    let base = &document.base;
    let caps = &document.capabilities;
    let mut manifest = Map::new();

    manifest.insert("manifest_version".into(), json!(version.number()));
    manifest.insert("name".into(), json!(base.name));
    manifest.insert("version".into(), json!(base.version));
    if let Some(description) = &base.description {
        manifest.insert("description".into(), json!(description));
    }
    if let Some(author) = &base.author {
        manifest.insert("author".into(), json!(author));
    }
    for (key, value) in &base.extra {
        manifest.insert(key.clone(), value.clone());
    }

    if caps.options {
        manifest.insert(
            "options_ui".into(),
            json!({ "page": EntrypointKind::Options.page(), "open_in_tab": true }),
        );
    }
    if caps.newtab {
        manifest.insert(
            "chrome_url_overrides".into(),
            json!({ "newtab": EntrypointKind::Newtab.page() }),
        );
    }
    if caps.devtools {
        manifest.insert(
            "devtools_page".into(),
            json!(EntrypointKind::Devtools.page()),
        );
    }

    let scripts = caps.content_scripts();
    if !scripts.is_empty() {
        manifest.insert("content_scripts".into(), json!(scripts));
    }

    manifest
}
