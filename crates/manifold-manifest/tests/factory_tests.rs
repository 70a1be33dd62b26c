//! Integration tests for the manifest factory against real project trees.

use manifold_fs::CommonPath;
use manifold_manifest::{
    Browser, EntrypointKind, Error, ManifestFactory, ManifestVersion, RunAt, TargetData,
};
use manifold_test_utils::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn factory(project: &TestProject, target: TargetData) -> ManifestFactory {
    let paths = CommonPath::new(project.root(), project.templates()).unwrap();
    ManifestFactory::new(paths, target)
}

#[test]
fn test_update_package_data_sets_base_fields() {
    let project = TestProject::react(18);
    project.package_json(&json!({
        "name": "reading-list",
        "version": "2.1.0",
        "description": "Save pages for later",
        "dependencies": { "react": "18.2.0" },
        "manifest": {
            "permissions": ["storage"],
            "host_permissions": ["https://*/*"],
            "background": { "service_worker": "ignored.js" }
        }
    }));

    let mut factory = factory(&project, TargetData::default());
    factory.update_package_data().unwrap();

    let manifest = factory.manifest();
    assert_eq!(
        manifest,
        json!({
            "manifest_version": 3,
            "name": "Reading list",
            "version": "2.1.0",
            "description": "Save pages for later",
            "permissions": ["storage"],
            "host_permissions": ["https://*/*"]
        })
    );
    assert_eq!(factory.ignored_overrides(), ["background".to_string()]);
    assert_eq!(factory.ui_library().unwrap().scaffold_path, "react18");
}

#[test]
fn test_mv2_merges_host_permissions() {
    let project = TestProject::react(18);
    project.package_json(&json!({
        "name": "x",
        "dependencies": { "react": "^18.0.0" },
        "manifest": {
            "permissions": ["tabs", "https://*/*"],
            "host_permissions": ["https://*/*", "http://localhost/*"]
        }
    }));

    let mut factory = factory(
        &project,
        TargetData::new(Browser::Firefox, ManifestVersion::Mv2),
    );
    factory.update_package_data().unwrap();

    let manifest = factory.manifest();
    assert_eq!(
        manifest["permissions"],
        json!(["tabs", "https://*/*", "http://localhost/*"])
    );
    assert!(manifest.get("host_permissions").is_none());
}

#[test]
fn test_missing_package_descriptor() {
    let project = TestProject::new();
    let mut factory = factory(&project, TargetData::default());
    let err = factory.update_package_data().unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}

#[test]
fn test_unsupported_library_surfaces() {
    let project = TestProject::new();
    project.package_json(&json!({ "name": "x", "dependencies": { "lodash": "4.0.0" } }));
    let mut factory = factory(&project, TargetData::default());

    let err = factory.update_package_data().unwrap_err();
    assert!(matches!(
        err,
        Error::Ui(manifold_ui::Error::UnsupportedLibrary { .. })
    ));
    assert!(err.to_string().contains("file an RFC"));
}

#[tokio::test]
async fn test_content_script_config_is_read() {
    let project = TestProject::react(18);
    project.write(
        "src/content.ts",
        r#"export const config = { matches: ["https://news.ycombinator.com/*"], run_at: "document_end" }"#,
    );
    let mut factory = factory(&project, TargetData::default());

    let script = factory.probe_content_script().await.unwrap();
    assert!(factory.toggle_content_script(script, true));

    let entry = factory.capabilities().content_script.clone().unwrap();
    assert_eq!(entry.js, vec!["content.ts"]);
    assert_eq!(entry.matches, vec!["https://news.ycombinator.com/*"]);
    assert_eq!(entry.run_at, Some(RunAt::DocumentEnd));
    assert_eq!(
        factory.manifest()["content_scripts"],
        json!([{
            "matches": ["https://news.ycombinator.com/*"],
            "js": ["content.ts"],
            "run_at": "document_end"
        }])
    );
}

#[rstest]
#[case(&["content.tsx", "content.js"], "content.tsx")]
#[case(&["content.jsx", "content.ts"], "content.ts")]
#[case(&["content.js"], "content.js")]
#[tokio::test]
async fn test_content_candidate_priority(#[case] files: &[&str], #[case] expected: &str) {
    let project = TestProject::react(18);
    for file in files {
        project.write(&format!("src/{}", file), "");
    }
    let factory = factory(&project, TargetData::default());

    let script = factory.probe_content_script().await.unwrap().unwrap();
    assert_eq!(script.js, vec![expected]);
}

#[tokio::test]
async fn test_directory_named_like_candidate_is_ignored() {
    let project = TestProject::react(18);
    project.write("src/background.ts/keep", "");
    let factory = factory(&project, TargetData::default());

    assert!(factory.probe_background().await.is_none());
}

#[rstest]
#[case(&["background.ts", "background.js"], "background.ts")]
#[case(&["background.js"], "background.js")]
#[tokio::test]
async fn test_background_candidate_priority(#[case] files: &[&str], #[case] expected: &str) {
    let project = TestProject::react(18);
    for file in files {
        project.write(&format!("src/{}", file), "");
    }
    let mut factory = factory(&project, TargetData::default());

    let found = factory.probe_background().await;
    assert!(factory.toggle_background(found.as_ref(), true));
    assert_eq!(
        factory.manifest()["background"],
        json!({ "service_worker": expected, "type": "module" })
    );
}

#[tokio::test]
async fn test_scaffolder_after_package_data() {
    let project = TestProject::react(18);
    project.write("src/options/index.tsx", "export default () => null");
    let mut factory = factory(&project, TargetData::default());
    factory.update_package_data().unwrap();

    let scaffolder = factory.scaffolder().unwrap();
    assert!(scaffolder.init_template_files(EntrypointKind::Options).await.unwrap());
    assert!(!scaffolder.init_template_files(EntrypointKind::Popup).await.unwrap());

    project.assert_file_exists(".manifold/options.html");
    project.assert_file_contains(".manifold/options.tsx", "\"../src/options/index\"");
    project.assert_file_contains(".manifold/options.html", "<title>Test extension</title>");
    project.assert_file_not_exists(".manifold/popup.html");
}

#[tokio::test]
async fn test_write_overwrites_previous_output() {
    let project = TestProject::react(18);
    project.write(
        ".manifold/manifest.json",
        r#"{"manifest_version": 3, "devtools_page": "stale.html", "stale": true}"#,
    );
    let mut factory = factory(&project, TargetData::default());
    factory.update_package_data().unwrap();
    factory.toggle_popup(true);
    factory.write(true).unwrap();

    let manifest = project.read_json(".manifold/manifest.json");
    assert!(manifest.get("devtools_page").is_none());
    assert!(manifest.get("stale").is_none());
    assert_eq!(manifest["action"]["default_popup"], "popup.html");

    let text = project.read(".manifold/manifest.json");
    assert!(text.starts_with("{\n  \""));
    assert!(text.ends_with("}\n"));

    let package = project.read_json(".manifold/package.json");
    assert_eq!(package["name"], "test-extension");
    assert_eq!(package["displayName"], "Test extension");
}

#[tokio::test]
async fn test_compact_write() {
    let project = TestProject::react(18);
    let mut factory = factory(&project, TargetData::default());
    factory.update_package_data().unwrap();
    factory.write(false).unwrap();

    let text = project.read(".manifold/manifest.json");
    assert!(!text.trim_end().contains('\n'));
}

#[test]
fn test_update_env_writes_declarations() {
    let project = TestProject::react(18);
    project.write(".env", "MANIFOLD_PUBLIC_API_URL=https://example.com\n");
    let mut factory = factory(
        &project,
        TargetData::new(Browser::Edge, ManifestVersion::Mv3),
    );

    assert!(factory.update_env().unwrap());
    assert!(!factory.update_env().unwrap());
    project.assert_file_contains(".manifold/index.d.ts", "MANIFOLD_PUBLIC_API_URL?: string");
    project.assert_file_contains(".manifold/index.d.ts", "MANIFOLD_TARGET: \"edge-mv3\"");
}
