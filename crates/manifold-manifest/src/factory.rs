//! The manifest factory.
//!
//! [`ManifestFactory`] owns the [`ManifestDocument`] of one synthesis run.
//! Discovery is split in two halves: `async` probes that only read the
//! project tree and return what they found, and synchronous toggles that
//! apply those findings to the document. The probes can therefore run
//! concurrently while the document is only ever mutated by its owner.

use std::collections::BTreeSet;

use manifold_fs::{CommonPath, JsonStore, NormalizedPath, io};
use manifold_ui::{UiLibrary, UiLibraryResolver};
use serde_json::Value;

use crate::capability::{CapabilitySet, ContentScript, EntrypointKind};
use crate::content::parse_content_script;
use crate::document::ManifestDocument;
use crate::env;
use crate::error::{Error, Result};
use crate::package::PackageData;
use crate::probe;
use crate::scaffold::Scaffolder;
use crate::schema::{ManifestSchema, schema_for};
use crate::target::TargetData;

/// Script extensions picked up from the contents directory.
const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Index files of a content-script directory, highest priority first.
const SCRIPT_INDEX_CANDIDATES: &[&str] = &["index.ts", "index.tsx", "index.js", "index.jsx"];

/// Page extensions picked up from the tabs directory.
const TAB_EXTENSIONS: &[&str] = &["tsx", "jsx", "vue", "svelte", "html"];

/// Builds the manifest of one project for one target.
pub struct ManifestFactory {
    common_path: CommonPath,
    target: TargetData,
    schema: Box<dyn ManifestSchema>,
    resolver: UiLibraryResolver,
    document: ManifestDocument,
    package: Option<PackageData>,
    scaffolder: Option<Scaffolder>,
    ignored_overrides: Vec<String>,
}

impl std::fmt::Debug for ManifestFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestFactory")
            .field("target", &self.target)
            .field("schema", &self.schema)
            .field("capabilities", &self.document.capabilities)
            .finish_non_exhaustive()
    }
}

impl ManifestFactory {
    /// Factory with an empty document rendered by the schema `target` selects.
    pub fn new(common_path: CommonPath, target: TargetData) -> Self {
        let resolver = UiLibraryResolver::new(
            common_path.project_directory.to_native(),
            common_path.static_template_path.to_native(),
        );
        Self {
            schema: schema_for(target.manifest_version),
            document: ManifestDocument::new(target.browser),
            common_path,
            target,
            resolver,
            package: None,
            scaffolder: None,
            ignored_overrides: Vec::new(),
        }
    }

    /// Replace the UI library resolver.
    pub fn with_resolver(mut self, resolver: UiLibraryResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn common_path(&self) -> &CommonPath {
        &self.common_path
    }

    pub fn target(&self) -> &TargetData {
        &self.target
    }

    pub fn schema(&self) -> &dyn ManifestSchema {
        self.schema.as_ref()
    }

    pub fn document(&self) -> &ManifestDocument {
        &self.document
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.document.capabilities
    }

    pub fn package(&self) -> Option<&PackageData> {
        self.package.as_ref()
    }

    pub fn ui_library(&self) -> Option<&UiLibrary> {
        self.scaffolder.as_ref().map(Scaffolder::library)
    }

    /// Override keys dropped because a capability owns them.
    pub fn ignored_overrides(&self) -> &[String] {
        &self.ignored_overrides
    }

    /// Regenerate the environment declaration file.
    ///
    /// Returns whether the file changed.
    pub fn update_env(&mut self) -> Result<bool> {
        env::write_declarations(&self.common_path, &self.target)
    }

    /// Reload the package descriptor, refresh the base fields and resolve
    /// the UI library the scaffolder renders with.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigRead`] when the descriptor is missing or malformed.
    /// - [`Error::Ui`] when no scaffold can be resolved.
    pub fn update_package_data(&mut self) -> Result<()> {
        let package = PackageData::load(&self.common_path)?;
        let (base, ignored) = package.base_fields();
        for key in &ignored {
            tracing::debug!(key = %key, "ignoring manifest override owned by a capability");
        }

        let library = self.resolver.resolve(&package.dependencies())?;
        tracing::debug!(
            library = %library.name,
            scaffold = %library.scaffold_path,
            "package data loaded"
        );

        self.scaffolder = Some(Scaffolder::new(
            &self.common_path,
            library,
            package.display_name(),
        ));
        self.document.base = base;
        self.ignored_overrides = ignored;
        self.package = Some(package);
        Ok(())
    }

    /// The scaffolder for the resolved UI library.
    pub fn scaffolder(&self) -> Result<&Scaffolder> {
        self.scaffolder.as_ref().ok_or(Error::PackageDataNotLoaded)
    }

    pub fn toggle_page(&mut self, kind: EntrypointKind, enable: bool) -> &mut Self {
        self.document.capabilities.set_page(kind, enable);
        self
    }

    pub fn toggle_popup(&mut self, enable: bool) -> &mut Self {
        self.toggle_page(EntrypointKind::Popup, enable)
    }

    pub fn toggle_options(&mut self, enable: bool) -> &mut Self {
        self.toggle_page(EntrypointKind::Options, enable)
    }

    pub fn toggle_newtab(&mut self, enable: bool) -> &mut Self {
        self.toggle_page(EntrypointKind::Newtab, enable)
    }

    pub fn toggle_devtools(&mut self, enable: bool) -> &mut Self {
        self.toggle_page(EntrypointKind::Devtools, enable)
    }

    /// Content-script entry for the source file at `path`.
    pub async fn content_script_from(
        &self,
        path: Option<&NormalizedPath>,
    ) -> Result<Option<ContentScript>> {
        let Some(path) = path else {
            return Ok(None);
        };
        let source = probe::read_text(path).await?;
        let script = self.common_path.source_relative(path);
        Ok(Some(parse_content_script(&script, &source)))
    }

    /// The primary content script, if one of the candidates exists.
    pub async fn probe_content_script(&self) -> Result<Option<ContentScript>> {
        let found = probe::first_file(&self.common_path.content_index_list).await;
        self.content_script_from(found.as_ref()).await
    }

    /// The background entry, if one of the candidates exists.
    pub async fn probe_background(&self) -> Option<NormalizedPath> {
        probe::first_file(&self.common_path.background_index_list).await
    }

    /// Set or clear the primary content script.
    ///
    /// A missing `script` clears the capability whatever `required` says.
    /// Returns whether the capability is present afterwards.
    pub fn toggle_content_script(&mut self, script: Option<ContentScript>, required: bool) -> bool {
        let caps = &mut self.document.capabilities;
        caps.content_script = script.filter(|_| required);
        caps.content_script.is_some()
    }

    /// Set or clear the background entry. Same contract as
    /// [`toggle_content_script`](Self::toggle_content_script).
    pub fn toggle_background(&mut self, path: Option<&NormalizedPath>, required: bool) -> bool {
        let entry = path
            .filter(|_| required)
            .map(|p| self.common_path.source_relative(p));
        let caps = &mut self.document.capabilities;
        caps.background = entry;
        caps.background.is_some()
    }

    /// Content scripts found in the contents directory, sorted by path.
    ///
    /// Direct script files and subdirectories with an index file count.
    pub async fn scan_content_scripts_directory(&self) -> Result<Vec<ContentScript>> {
        let dir = self.common_path.contents_directory();
        let mut scripts = Vec::new();

        for entry in probe::read_dir_sorted(&dir).await? {
            let script_path = if entry.is_dir {
                let candidates: Vec<NormalizedPath> = SCRIPT_INDEX_CANDIDATES
                    .iter()
                    .map(|name| entry.path.join(name))
                    .collect();
                match probe::first_file(&candidates).await {
                    Some(index) => index,
                    None => continue,
                }
            } else if entry
                .path
                .extension()
                .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
                && !is_declaration_file(&entry.path)
            {
                entry.path
            } else {
                continue;
            };

            if let Some(script) = self.content_script_from(Some(&script_path)).await? {
                scripts.push(script);
            }
        }

        tracing::trace!(dir = %dir, count = scripts.len(), "scanned contents directory");
        Ok(scripts)
    }

    /// Tab pages found in the tabs directory, as `tabs/<name>.html`.
    pub async fn scan_tabs_directory(&self) -> Result<Vec<String>> {
        let dir = self.common_path.tabs_directory();
        let mut pages = BTreeSet::new();

        for entry in probe::read_dir_sorted(&dir).await? {
            if entry.is_dir {
                continue;
            }
            let Some(ext) = entry.path.extension() else {
                continue;
            };
            if !TAB_EXTENSIONS.contains(&ext) {
                continue;
            }
            if let Some(stem) = entry.path.file_stem() {
                pages.insert(format!("tabs/{}.html", stem));
            }
        }

        tracing::trace!(dir = %dir, count = pages.len(), "scanned tabs directory");
        Ok(pages.into_iter().collect())
    }

    /// Replace the directory content scripts with `scripts`.
    ///
    /// Returns whether any were found.
    pub fn add_content_scripts_directory(&mut self, scripts: Vec<ContentScript>) -> bool {
        let caps = &mut self.document.capabilities;
        caps.directory_content_scripts = scripts;
        !caps.directory_content_scripts.is_empty()
    }

    /// Replace the tab pages with `pages`.
    ///
    /// Returns whether any were found.
    pub fn add_tabs_directory(&mut self, pages: Vec<String>) -> bool {
        let caps = &mut self.document.capabilities;
        caps.tab_pages = pages;
        !caps.tab_pages.is_empty()
    }

    /// The manifest as it would be written now.
    pub fn manifest(&self) -> Value {
        self.schema.render(&self.document)
    }

    /// Write the manifest and the package metadata, replacing whatever is
    /// on disk.
    pub fn write(&self, pretty: bool) -> Result<()> {
        let package = self.package.as_ref().ok_or(Error::PackageDataNotLoaded)?;
        io::ensure_dir(&self.common_path.dot_directory)?;

        let store = JsonStore::with_pretty(pretty);
        let manifest_path = self.common_path.manifest_path();
        store.save(&manifest_path, &self.manifest())?;
        store.save(&self.common_path.package_path(), &package.to_output())?;

        tracing::info!(path = %manifest_path, target = %self.target, "manifest written");
        Ok(())
    }
}

/// `*.d.ts` files carry type declarations only.
fn is_declaration_file(path: &NormalizedPath) -> bool {
    path.file_name().is_some_and(|name| name.ends_with(".d.ts"))
}
