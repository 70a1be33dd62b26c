//! Property tests for the capability toggles.
//!
//! Every toggle owns a disjoint region of the manifest, so any sequence of
//! toggles on distinct capabilities must commute, repeating a toggle must
//! change nothing, and the rendered keys must always match the enabled
//! capabilities exactly.

use manifold_fs::CommonPath;
use manifold_manifest::{
    Browser, Capability, ContentScript, EntrypointKind, ManifestFactory, ManifestVersion,
    TargetData,
};
use proptest::prelude::*;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Page(EntrypointKind, bool),
    Background(bool),
    ContentScript(bool),
    ContentsDirectory(usize),
    TabsDirectory(usize),
}

impl Op {
    /// Which piece of state the operation writes.
    fn slot(&self) -> String {
        match self {
            Op::Page(kind, _) => format!("page:{}", kind),
            Op::Background(_) => "background".into(),
            Op::ContentScript(_) => "content".into(),
            Op::ContentsDirectory(_) => "contents".into(),
            Op::TabsDirectory(_) => "tabs".into(),
        }
    }

    fn apply(&self, factory: &mut ManifestFactory) {
        match self {
            Op::Page(kind, on) => {
                factory.toggle_page(*kind, *on);
            }
            Op::Background(on) => {
                let path = factory.common_path().source_directory.join("background.ts");
                factory.toggle_background(Some(&path), *on);
            }
            Op::ContentScript(on) => {
                factory.toggle_content_script(Some(ContentScript::new("content.ts")), *on);
            }
            Op::ContentsDirectory(n) => {
                let scripts = (0..*n)
                    .map(|i| ContentScript::new(format!("contents/script{}.ts", i)))
                    .collect();
                factory.add_content_scripts_directory(scripts);
            }
            Op::TabsDirectory(n) => {
                let pages = (0..*n).map(|i| format!("tabs/page{}.html", i)).collect();
                factory.add_tabs_directory(pages);
            }
        }
    }
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (prop::sample::select(EntrypointKind::ALL.to_vec()), any::<bool>())
            .prop_map(|(kind, on)| Op::Page(kind, on)),
        any::<bool>().prop_map(Op::Background),
        any::<bool>().prop_map(Op::ContentScript),
        (0usize..3).prop_map(Op::ContentsDirectory),
        (0usize..3).prop_map(Op::TabsDirectory),
    ]
}

fn target() -> impl Strategy<Value = TargetData> {
    (
        prop::sample::select(Browser::ALL.to_vec()),
        prop::sample::select(vec![ManifestVersion::Mv2, ManifestVersion::Mv3]),
    )
        .prop_map(|(browser, version)| TargetData::new(browser, version))
}

fn factory(temp: &TempDir, target: TargetData) -> ManifestFactory {
    let paths = CommonPath::new(temp.path(), temp.path()).unwrap();
    ManifestFactory::new(paths, target)
}

proptest! {
    #[test]
    fn test_distinct_toggles_commute(target in target(), a in op(), b in op(), prefix in prop::collection::vec(op(), 0..6)) {
        prop_assume!(a.slot() != b.slot());
        let temp = TempDir::new().unwrap();

        let mut forward = factory(&temp, target);
        let mut backward = factory(&temp, target);
        for p in &prefix {
            p.apply(&mut forward);
            p.apply(&mut backward);
        }

        a.apply(&mut forward);
        b.apply(&mut forward);
        b.apply(&mut backward);
        a.apply(&mut backward);

        prop_assert_eq!(forward.manifest(), backward.manifest());
    }

    #[test]
    fn test_toggles_are_idempotent(target in target(), ops in prop::collection::vec(op(), 1..8)) {
        let temp = TempDir::new().unwrap();
        let mut once = factory(&temp, target);
        let mut twice = factory(&temp, target);

        for op in &ops {
            op.apply(&mut once);
            op.apply(&mut twice);
            op.apply(&mut twice);
        }

        prop_assert_eq!(once.manifest(), twice.manifest());
    }

    #[test]
    fn test_rendered_keys_match_enabled_capabilities(target in target(), ops in prop::collection::vec(op(), 0..12)) {
        let temp = TempDir::new().unwrap();
        let mut factory = factory(&temp, target);
        for op in &ops {
            op.apply(&mut factory);
        }

        let manifest = factory.manifest();
        let object = manifest.as_object().unwrap();
        for capability in Capability::ALL {
            let enabled = factory.capabilities().is_enabled(capability);
            for key in capability.owned_keys(target.manifest_version) {
                prop_assert_eq!(
                    object.contains_key(*key),
                    enabled,
                    "{} key {} in {}",
                    capability,
                    key,
                    target
                );
            }
        }
    }
}

#[test]
fn test_page_toggle_off_removes_every_field() {
    let temp = TempDir::new().unwrap();
    for version in [ManifestVersion::Mv2, ManifestVersion::Mv3] {
        let mut factory = factory(&temp, TargetData::new(Browser::Chrome, version));
        factory
            .toggle_popup(true)
            .toggle_options(true)
            .toggle_newtab(true)
            .toggle_devtools(true);
        let on = factory.manifest();
        for kind in EntrypointKind::ALL {
            for key in Capability::from(kind).owned_keys(version) {
                assert!(on.get(*key).is_some(), "{key} missing for {version}");
            }
        }

        factory
            .toggle_popup(false)
            .toggle_options(false)
            .toggle_newtab(false)
            .toggle_devtools(false);
        let off = factory.manifest();
        for kind in EntrypointKind::ALL {
            for key in Capability::from(kind).owned_keys(version) {
                assert!(off.get(*key).is_none(), "{key} left behind for {version}");
            }
        }
    }
}

#[test]
fn test_popup_key_follows_schema_version() {
    let temp = TempDir::new().unwrap();

    let mut mv2 = factory(&temp, TargetData::new(Browser::Firefox, ManifestVersion::Mv2));
    mv2.toggle_popup(true);
    let manifest = mv2.manifest();
    assert_eq!(manifest["browser_action"]["default_popup"], "popup.html");
    assert!(manifest.get("action").is_none());

    let mut mv3 = factory(&temp, TargetData::new(Browser::Chrome, ManifestVersion::Mv3));
    mv3.toggle_popup(true);
    let manifest = mv3.manifest();
    assert_eq!(manifest["action"]["default_popup"], "popup.html");
    assert!(manifest.get("browser_action").is_none());
}
