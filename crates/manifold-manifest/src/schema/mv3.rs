//! Manifest V3 rendering.

use serde_json::{Value, json};

use super::{ManifestSchema, render_common};
use crate::capability::{ContentScript, EntrypointKind};
use crate::document::ManifestDocument;
use crate::target::ManifestVersion;

/// Manifest V3: `action`, service-worker background (event-page scripts
/// on Firefox), separate `host_permissions`, object-form
/// `web_accessible_resources`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mv3Schema;

impl ManifestSchema for Mv3Schema {
    fn version(&self) -> ManifestVersion {
        ManifestVersion::Mv3
    }

    fn render(&self, document: &ManifestDocument) -> Value {
        let caps = &document.capabilities;
        let mut manifest = render_common(document, ManifestVersion::Mv3);

        manifest.insert("permissions".into(), json!(document.base.permissions));
        if !document.base.host_permissions.is_empty() {
            manifest.insert(
                "host_permissions".into(),
                json!(document.base.host_permissions),
            );
        }

        if caps.popup {
            manifest.insert(
                "action".into(),
                json!({ "default_popup": EntrypointKind::Popup.page() }),
            );
        }

        if let Some(background) = &caps.background {
            let value = if document.browser.supports_service_worker() {
                json!({ "service_worker": background, "type": "module" })
            } else {
                json!({ "scripts": [background], "type": "module" })
            };
            manifest.insert("background".into(), value);
        }

        if !caps.tab_pages.is_empty() {
            manifest.insert(
                "web_accessible_resources".into(),
                json!([{
                    "resources": caps.tab_pages,
                    "matches": [ContentScript::DEFAULT_MATCH]
                }]),
            );
        }

        Value::Object(manifest)
    }
}
