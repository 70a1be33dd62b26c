//! [`TestProject`] builder for synthesis test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary extension project with a sibling template root.
///
/// The sandbox holds two directories: `project/` (the extension project)
/// and `templates/` (scaffold subtrees keyed like `react18`).
///
/// # Example
///
/// ```rust,no_run
/// use manifold_test_utils::TestProject;
///
/// let project = TestProject::react(18);
/// project.write("src/popup.tsx", "export default () => null");
/// project.assert_file_exists("package.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Empty project with an empty template root.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("project/src")).unwrap();
        fs::create_dir_all(temp_dir.path().join("templates")).unwrap();
        Self { temp_dir }
    }

    /// React project pinned to `major`, with its scaffold installed.
    pub fn react(major: u64) -> Self {
        let project = Self::new();
        project.package_json(&json!({
            "name": "test-extension",
            "version": "0.1.0",
            "dependencies": { "react": format!("^{}.0.0", major) }
        }));
        let key = if major < 18 {
            "react17".to_string()
        } else {
            format!("react{}", major)
        };
        project.add_template(&key);
        project
    }

    /// The extension project root.
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// The template root.
    pub fn templates(&self) -> PathBuf {
        self.temp_dir.path().join("templates")
    }

    /// The sandbox containing both roots.
    pub fn sandbox(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `package.json`.
    pub fn package_json(&self, value: &Value) {
        let body = serde_json::to_string_pretty(value).unwrap();
        self.write("package.json", &body);
    }

    /// Write `content` to `path` relative to the project root, creating
    /// parent directories.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Remove a file or directory relative to the project root.
    pub fn remove(&self, path: &str) {
        let full_path = self.root().join(path);
        if full_path.is_dir() {
            fs::remove_dir_all(&full_path).unwrap();
        } else {
            fs::remove_file(&full_path).unwrap();
        }
    }

    /// Read a file relative to the project root.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Read and parse a JSON file relative to the project root.
    pub fn read_json(&self, path: &str) -> Value {
        serde_json::from_str(&self.read(path)).unwrap()
    }

    /// Install a minimal scaffold subtree under `templates/<key>/`.
    pub fn add_template(&self, key: &str) {
        let dir = self.templates().join(key);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("index.html"),
            "<!DOCTYPE html>\n<html>\n<head><title>__MANIFOLD_PAGE_TITLE__</title></head>\n\
             <body><div id=\"root\"></div>\
             <script src=\"./__MANIFOLD_PAGE_NAME__.tsx\" type=\"module\"></script></body>\n</html>\n",
        )
        .unwrap();
        fs::write(
            dir.join("index.tsx"),
            "import Page from \"__MANIFOLD_IMPORT_MODULE__\"\n\nmount(Page)\n",
        )
        .unwrap();
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
