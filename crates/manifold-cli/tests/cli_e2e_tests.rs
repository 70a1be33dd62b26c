//! CLI end-to-end tests that invoke the compiled `manifold` binary.
//!
//! These tests use assert_cmd to run the binary against temporary
//! projects built with `TestProject`.

use assert_cmd::Command;
use manifold_test_utils::TestProject;
use predicates::prelude::*;
use serde_json::json;

/// Get a Command for the manifold binary with a clean environment.
fn manifold_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("manifold"));
    cmd.env_remove("MANIFOLD_TARGET")
        .env_remove("MANIFOLD_TEMPLATES")
        .env_remove("RUST_LOG");
    cmd
}

fn manifest_cmd(project: &TestProject) -> Command {
    let mut cmd = manifold_cmd();
    cmd.arg("manifest")
        .arg("--root")
        .arg(project.root())
        .arg("--templates")
        .arg(project.templates());
    cmd
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    manifold_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browser-extension manifests"));
}

#[test]
fn test_version_output() {
    manifold_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("manifold"));
}

#[test]
fn test_no_command_shows_help_hint() {
    manifold_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("manifold --help"));
}

// ============================================================================
// Manifest Command Tests
// ============================================================================

#[test]
fn test_manifest_writes_output() {
    let project = TestProject::react(18);
    project.write("src/popup.tsx", "export default () => null");
    project.write("src/background.ts", "");

    manifest_cmd(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("chrome-mv3"))
        .stdout(predicate::str::contains("popup"))
        .stdout(predicate::str::contains("background"));

    let manifest = project.read_json(".manifold/manifest.json");
    assert_eq!(manifest["action"], json!({ "default_popup": "popup.html" }));
    assert_eq!(
        manifest["background"],
        json!({ "service_worker": "background.ts", "type": "module" })
    );
    project.assert_file_exists(".manifold/framework-version");
    project.assert_file_exists(".manifold/index.d.ts");
}

#[test]
fn test_manifest_target_from_env() {
    let project = TestProject::react(18);
    project.write("src/popup.tsx", "");

    manifest_cmd(&project)
        .env("MANIFOLD_TARGET", "firefox-mv2")
        .assert()
        .success();

    let manifest = project.read_json(".manifold/manifest.json");
    assert_eq!(manifest["manifest_version"], 2);
    assert!(manifest.get("browser_action").is_some());
}

#[test]
fn test_manifest_compact() {
    let project = TestProject::react(18);

    manifest_cmd(&project).arg("--compact").assert().success();

    let text = project.read(".manifold/manifest.json");
    assert!(!text.trim_end().contains('\n'));
}

#[test]
fn test_manifest_warns_without_entrypoints() {
    let project = TestProject::react(18);

    manifest_cmd(&project)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"))
        .stderr(predicate::str::contains("entrypoints"));
}

#[test]
fn test_manifest_invalid_target_fails() {
    let project = TestProject::react(18);

    manifest_cmd(&project)
        .args(["--target", "chrome-mv4"])
        .assert()
        .failure();
}

#[test]
fn test_manifest_missing_descriptor_fails() {
    let project = TestProject::new();

    manifest_cmd(&project)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("package descriptor"));
    project.assert_file_not_exists(".manifold/manifest.json");
}

#[test]
fn test_manifest_unsupported_library_fails() {
    let project = TestProject::new();
    project.package_json(&json!({ "name": "x", "dependencies": { "preact": "10.0.0" } }));

    manifest_cmd(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No supported UI library found"));
}

// ============================================================================
// UI Command Tests
// ============================================================================

#[test]
fn test_ui_prints_resolution() {
    let project = TestProject::react(18);

    manifold_cmd()
        .arg("ui")
        .arg("--root")
        .arg(project.root())
        .arg("--templates")
        .arg(project.templates())
        .assert()
        .success()
        .stdout(predicate::str::contains("react18"));
}

#[test]
fn test_ui_json_output() {
    let project = TestProject::new();
    project.package_json(&json!({ "name": "x", "dependencies": { "react": "16.14.0" } }));

    let output = manifold_cmd()
        .arg("ui")
        .arg("--root")
        .arg(project.root())
        .arg("--templates")
        .arg(project.templates())
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        json!({ "name": "react", "scaffold_path": "react17", "major_version": 16 })
    );
}

#[test]
fn test_manifest_uses_bundled_templates() {
    let project = TestProject::new();
    project.package_json(&json!({
        "name": "bundled",
        "dependencies": { "vue": "^3.3.0" }
    }));
    project.write("src/options.vue", "<template><p>Options</p></template>");

    manifold_cmd()
        .arg("manifest")
        .arg("--root")
        .arg(project.root())
        .assert()
        .success();

    project.assert_file_contains(".manifold/options.ts", "createApp(Page)");
    project.assert_file_contains(".manifold/options.ts", "\"../src/options.vue\"");
    project.assert_file_contains(".manifold/options.html", "./options.ts");
    let manifest = project.read_json(".manifold/manifest.json");
    assert_eq!(
        manifest["options_ui"],
        json!({ "page": "options.html", "open_in_tab": true })
    );
}
