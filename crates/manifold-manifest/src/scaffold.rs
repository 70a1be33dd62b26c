//! Scaffold materialization for UI page entrypoints.
//!
//! A UI page (popup, options, new tab, devtools) is authored by the user as
//! a single component module, e.g. `popup.tsx` or `options/index.vue`. To
//! turn it into an extension page the scaffolder copies the UI library's
//! template subtree into the working directory, wiring the template to the
//! user's module: `index.html` becomes `popup.html`, `index.tsx` becomes
//! `popup.tsx`, and so on.

use manifold_fs::{CommonPath, NormalizedPath};
use manifold_ui::UiLibrary;

use crate::capability::EntrypointKind;
use crate::error::Result;
use crate::probe;

/// Replaced with the user's module path, relative to the working directory.
pub const IMPORT_MODULE_PLACEHOLDER: &str = "__MANIFOLD_IMPORT_MODULE__";

/// Replaced with the extension display name.
pub const PAGE_TITLE_PLACEHOLDER: &str = "__MANIFOLD_PAGE_TITLE__";

/// Replaced with the entrypoint kind, e.g. `popup`.
pub const PAGE_NAME_PLACEHOLDER: &str = "__MANIFOLD_PAGE_NAME__";

/// Extensions dropped from import specifiers.
const IMPLICIT_IMPORT_EXTENSIONS: &[&str] = &["tsx", "jsx", "ts", "js"];

/// A file of the template subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TemplateFile {
    /// Everything from the first `.` of the file name, e.g. `.html`.
    suffix: String,
    path: NormalizedPath,
}

/// Materializes scaffold templates for one project and UI library.
///
/// Calls for different [`EntrypointKind`]s touch disjoint files and may run
/// concurrently.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    project_directory: NormalizedPath,
    source_directory: NormalizedPath,
    dot_directory: NormalizedPath,
    template_directory: NormalizedPath,
    library: UiLibrary,
    page_title: String,
}

impl Scaffolder {
    pub fn new(common_path: &CommonPath, library: UiLibrary, page_title: impl Into<String>) -> Self {
        Self {
            project_directory: common_path.project_directory.clone(),
            source_directory: common_path.source_directory.clone(),
            dot_directory: common_path.dot_directory.clone(),
            template_directory: common_path
                .static_template_path
                .join(&library.scaffold_path),
            library,
            page_title: page_title.into(),
        }
    }

    pub fn library(&self) -> &UiLibrary {
        &self.library
    }

    /// Module paths that satisfy `kind`, highest priority first.
    pub fn module_candidates(&self, kind: EntrypointKind) -> Vec<NormalizedPath> {
        let extensions = self.library.name.page_extensions();
        let flat = extensions
            .iter()
            .map(|ext| self.source_directory.join(&format!("{}.{}", kind, ext)));
        let nested = extensions
            .iter()
            .map(|ext| self.source_directory.join(&format!("{}/index.{}", kind, ext)));
        flat.chain(nested).collect()
    }

    /// First existing module for `kind`.
    pub async fn find_module(&self, kind: EntrypointKind) -> Option<NormalizedPath> {
        probe::first_file(&self.module_candidates(kind)).await
    }

    /// Materialize the page for `kind` if the user wrote a module for it.
    ///
    /// Returns whether the entrypoint is present. When it is not, outputs
    /// left over from an earlier run are removed.
    pub async fn init_template_files(&self, kind: EntrypointKind) -> Result<bool> {
        let Some(module) = self.find_module(kind).await else {
            self.remove_outputs(kind).await?;
            tracing::trace!(%kind, "no module found");
            return Ok(false);
        };

        let import = self.import_path(&module);
        let templates = self.template_files().await?;
        tokio::fs::create_dir_all(self.dot_directory.to_native())
            .await
            .map_err(|e| manifold_fs::Error::io(self.dot_directory.to_native(), e))?;

        for template in &templates {
            let content = probe::read_text(&template.path)
                .await?
                .replace(IMPORT_MODULE_PLACEHOLDER, &import)
                .replace(PAGE_TITLE_PLACEHOLDER, &self.page_title)
                .replace(PAGE_NAME_PLACEHOLDER, kind.as_str());

            let output = self.output_path(kind, &template.suffix);
            tokio::fs::write(output.to_native(), content)
                .await
                .map_err(|e| manifold_fs::Error::io(output.to_native(), e))?;
        }

        tracing::debug!(%kind, module = %module, files = templates.len(), "scaffolded page");
        Ok(true)
    }

    async fn remove_outputs(&self, kind: EntrypointKind) -> Result<()> {
        if !probe::is_dir(&self.template_directory).await {
            return Ok(());
        }
        for template in self.template_files().await? {
            let output = self.output_path(kind, &template.suffix);
            match tokio::fs::remove_file(output.to_native()).await {
                Ok(()) => tracing::debug!(path = %output, "removed stale scaffold output"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(manifold_fs::Error::io(output.to_native(), e).into()),
            }
        }
        Ok(())
    }

    async fn template_files(&self) -> Result<Vec<TemplateFile>> {
        if !probe::is_dir(&self.template_directory).await {
            return Err(manifold_fs::Error::io(
                self.template_directory.to_native(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "scaffold template missing"),
            )
            .into());
        }

        let mut files = Vec::new();
        for entry in probe::read_dir_sorted(&self.template_directory).await? {
            if entry.is_dir {
                continue;
            }
            let Some(name) = entry.path.file_name() else {
                continue;
            };
            match name.find('.') {
                Some(idx) if idx > 0 => files.push(TemplateFile {
                    suffix: name[idx..].to_string(),
                    path: entry.path.clone(),
                }),
                _ => tracing::debug!(file = %name, "skipping template file without extension"),
            }
        }
        Ok(files)
    }

    fn output_path(&self, kind: EntrypointKind, suffix: &str) -> NormalizedPath {
        self.dot_directory.join(&format!("{}{}", kind, suffix))
    }

    /// Import specifier for `module` as seen from the working directory.
    fn import_path(&self, module: &NormalizedPath) -> String {
        let relative = module
            .relative_to(&self.project_directory)
            .unwrap_or_else(|| module.as_str().to_string());
        let relative = match module.extension() {
            Some(ext) if IMPLICIT_IMPORT_EXTENSIONS.contains(&ext) => relative
                .strip_suffix(&format!(".{}", ext))
                .map(str::to_string)
                .unwrap_or(relative),
            _ => relative,
        };
        format!("../{}", relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifold_ui::SupportedLibrary;
    use std::fs;
    use tempfile::TempDir;

    fn scaffolder(temp: &TempDir, name: SupportedLibrary, key: &str) -> Scaffolder {
        let templates = temp.path().join("templates");
        let dir = templates.join(key);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("index.html"),
            "<title>__MANIFOLD_PAGE_TITLE__</title><script src=\"./__MANIFOLD_PAGE_NAME__.tsx\"></script>",
        )
        .unwrap();
        fs::write(
            dir.join("index.tsx"),
            "import Page from \"__MANIFOLD_IMPORT_MODULE__\"\n",
        )
        .unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();

        let paths = CommonPath::new(&project, &templates).unwrap();
        let library = UiLibrary {
            name,
            scaffold_path: key.to_string(),
            major_version: 18,
        };
        Scaffolder::new(&paths, library, "Reader")
    }

    #[test]
    fn test_module_candidates_order() {
        let temp = TempDir::new().unwrap();
        let s = scaffolder(&temp, SupportedLibrary::React, "react18");
        let names: Vec<String> = s
            .module_candidates(EntrypointKind::Popup)
            .iter()
            .map(|p| p.relative_to(&s.source_directory).unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["popup.tsx", "popup.jsx", "popup/index.tsx", "popup/index.jsx"]
        );
    }

    #[test]
    fn test_vue_candidates() {
        let temp = TempDir::new().unwrap();
        let s = scaffolder(&temp, SupportedLibrary::Vue, "vue3");
        let names: Vec<String> = s
            .module_candidates(EntrypointKind::Options)
            .iter()
            .filter_map(|p| p.relative_to(&s.source_directory))
            .collect();
        assert_eq!(names, vec!["options.vue", "options/index.vue"]);
    }

    #[tokio::test]
    async fn test_init_without_module_returns_false() {
        let temp = TempDir::new().unwrap();
        let s = scaffolder(&temp, SupportedLibrary::React, "react18");

        assert!(!s.init_template_files(EntrypointKind::Popup).await.unwrap());
        assert!(!s.dot_directory.join("popup.html").exists());
    }

    #[tokio::test]
    async fn test_init_materializes_templates() {
        let temp = TempDir::new().unwrap();
        let s = scaffolder(&temp, SupportedLibrary::React, "react18");
        fs::write(s.source_directory.join("popup.tsx").to_native(), "export default () => null").unwrap();

        assert!(s.init_template_files(EntrypointKind::Popup).await.unwrap());

        let html = fs::read_to_string(s.dot_directory.join("popup.html").to_native()).unwrap();
        assert!(html.contains("<title>Reader</title>"));
        assert!(html.contains("src=\"./popup.tsx\""));
        let mount = fs::read_to_string(s.dot_directory.join("popup.tsx").to_native()).unwrap();
        assert_eq!(mount, "import Page from \"../popup\"\n");
        // The user's module is never touched
        let user = fs::read_to_string(s.source_directory.join("popup.tsx").to_native()).unwrap();
        assert_eq!(user, "export default () => null");
    }

    #[tokio::test]
    async fn test_nested_module_import_path() {
        let temp = TempDir::new().unwrap();
        let s = scaffolder(&temp, SupportedLibrary::React, "react18");
        fs::create_dir_all(s.source_directory.join("newtab").to_native()).unwrap();
        fs::write(s.source_directory.join("newtab/index.jsx").to_native(), "").unwrap();

        assert!(s.init_template_files(EntrypointKind::Newtab).await.unwrap());

        let mount = fs::read_to_string(s.dot_directory.join("newtab.tsx").to_native()).unwrap();
        assert_eq!(mount, "import Page from \"../newtab/index\"\n");
    }

    #[tokio::test]
    async fn test_svelte_import_keeps_extension() {
        let temp = TempDir::new().unwrap();
        let s = scaffolder(&temp, SupportedLibrary::Svelte, "svelte4");
        fs::write(s.source_directory.join("devtools.svelte").to_native(), "").unwrap();

        assert!(s.init_template_files(EntrypointKind::Devtools).await.unwrap());

        let mount = fs::read_to_string(s.dot_directory.join("devtools.tsx").to_native()).unwrap();
        assert!(mount.contains("\"../devtools.svelte\""));
    }

    #[tokio::test]
    async fn test_removed_module_removes_outputs() {
        let temp = TempDir::new().unwrap();
        let s = scaffolder(&temp, SupportedLibrary::React, "react18");
        let module = s.source_directory.join("options.tsx");
        fs::write(module.to_native(), "").unwrap();
        assert!(s.init_template_files(EntrypointKind::Options).await.unwrap());

        fs::remove_file(module.to_native()).unwrap();
        assert!(!s.init_template_files(EntrypointKind::Options).await.unwrap());

        assert!(!s.dot_directory.join("options.html").exists());
        assert!(!s.dot_directory.join("options.tsx").exists());
    }

    #[tokio::test]
    async fn test_missing_template_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let mut s = scaffolder(&temp, SupportedLibrary::React, "react18");
        s.template_directory = s.template_directory.join("missing");
        fs::write(s.source_directory.join("popup.tsx").to_native(), "").unwrap();

        let err = s.init_template_files(EntrypointKind::Popup).await.unwrap_err();
        assert!(matches!(err, crate::Error::Fs(_)));
    }
}
