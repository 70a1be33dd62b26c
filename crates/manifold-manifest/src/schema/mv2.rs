//! Manifest V2 rendering.

use serde_json::{Value, json};

use super::{ManifestSchema, render_common};
use crate::capability::EntrypointKind;
use crate::document::ManifestDocument;
use crate::target::ManifestVersion;

/// Manifest V2: `browser_action`, persistent-flagged background scripts,
/// host permissions folded into `permissions`, string-list
/// `web_accessible_resources`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mv2Schema;

impl ManifestSchema for Mv2Schema {
    fn version(&self) -> ManifestVersion {
        ManifestVersion::Mv2
    }

    fn render(&self, document: &ManifestDocument) -> Value {
        let caps = &document.capabilities;
        let mut manifest = render_common(document, ManifestVersion::Mv2);

        let mut permissions = document.base.permissions.clone();
        for host in &document.base.host_permissions {
            if !permissions.contains(host) {
                permissions.push(host.clone());
            }
        }
        manifest.insert("permissions".into(), json!(permissions));

        if caps.popup {
            manifest.insert(
                "browser_action".into(),
                json!({ "default_popup": EntrypointKind::Popup.page() }),
            );
        }

        if let Some(background) = &caps.background {
            manifest.insert(
                "background".into(),
                json!({ "scripts": [background], "persistent": false }),
            );
        }

        if !caps.tab_pages.is_empty() {
            manifest.insert("web_accessible_resources".into(), json!(caps.tab_pages));
        }

        Value::Object(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilitySet;
    use crate::package::BaseFields;
    use crate::target::Browser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_mv2_document() {
        let document = ManifestDocument {
            browser: Browser::Chrome,
            base: BaseFields {
                name: "Reader".into(),
                version: "1.0.0".into(),
                permissions: vec!["storage".into()],
                host_permissions: vec!["https://*/*".into(), "storage".into()],
                ..Default::default()
            },
            capabilities: CapabilitySet {
                popup: true,
                background: Some("background.ts".into()),
                tab_pages: vec!["tabs/welcome.html".into()],
                ..Default::default()
            },
        };

        assert_eq!(
            Mv2Schema.render(&document),
            json!({
                "manifest_version": 2,
                "name": "Reader",
                "version": "1.0.0",
                "permissions": ["storage", "https://*/*"],
                "browser_action": { "default_popup": "popup.html" },
                "background": { "scripts": ["background.ts"], "persistent": false },
                "web_accessible_resources": ["tabs/welcome.html"]
            })
        );
    }
}
