//! End-to-end manifest synthesis.
//!
//! One run goes through the [`Phase`]s in order. Everything before
//! [`Phase::Write`] only reads the project tree or writes generated files
//! inside the working directory, so a failure at any point leaves the
//! manifest of the previous successful run in place.

use manifold_fs::{CommonPath, NormalizedPath, io};
use manifold_manifest::{ContentScript, EntrypointKind, ManifestFactory, TargetData};

use crate::error::Result;
use crate::hooks::SynthesisHooks;
use crate::reporter::{Phase, Reporter, SynthesisEvent};

/// Warning reported when a run discovers nothing at all.
pub const NO_ENTRYPOINTS_WARNING: &str =
    "Unable to find any entrypoints. The extension will have no pages or scripts.";

/// Options for a synthesis run.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisOptions {
    /// Indent the written JSON.
    pub pretty: bool,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// What the discovery batch found, one flag per batch member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryResult {
    pub popup: bool,
    pub options: bool,
    pub newtab: bool,
    pub devtools: bool,
    pub content_script: bool,
    pub background: bool,
    pub contents_directory: bool,
    pub tabs_directory: bool,
}

impl DiscoveryResult {
    /// Whether any entrypoint was found.
    pub fn any(&self) -> bool {
        self.popup
            || self.options
            || self.newtab
            || self.devtools
            || self.content_script
            || self.background
            || self.contents_directory
            || self.tabs_directory
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct SynthesisReport {
    pub discovery: DiscoveryResult,
    /// The factory, holding the document that was written.
    pub factory: ManifestFactory,
}

/// Probe results gathered concurrently, applied after the join.
struct Discovered {
    pages: [bool; 4],
    content_script: Option<ContentScript>,
    background: Option<NormalizedPath>,
    contents: Vec<ContentScript>,
    tabs: Vec<String>,
}

/// Synthesize and write the manifest for `target`.
///
/// # Errors
///
/// Any error from a phase aborts the run before the manifest is written.
pub async fn create_manifest(
    common_path: CommonPath,
    target: TargetData,
    hooks: &dyn SynthesisHooks,
    reporter: &dyn Reporter,
    options: SynthesisOptions,
) -> Result<SynthesisReport> {
    tracing::debug!(project = %common_path.project_directory, target = %target, "creating manifest");

    start(reporter, Phase::PrepareWorkspace);
    tracing::debug!("Ensure exists: {}", common_path.dot_directory);
    io::ensure_dir(&common_path.dot_directory)?;
    complete(reporter, Phase::PrepareWorkspace);

    start(reporter, Phase::ExternalSteps);
    hooks.update_version_file(&common_path).await?;
    hooks.generate_icons(&common_path).await?;
    complete(reporter, Phase::ExternalSteps);

    start(reporter, Phase::LoadPackage);
    let mut factory = ManifestFactory::new(common_path, target);
    factory.update_env()?;
    factory.update_package_data()?;
    for key in factory.ignored_overrides() {
        reporter.report(&SynthesisEvent::Warning(format!(
            "Ignoring manifest override \"{}\": it is generated from the project files",
            key
        )));
    }
    complete(reporter, Phase::LoadPackage);

    start(reporter, Phase::Discovery);
    let discovered = discover(&factory).await?;
    let [popup, options_page, newtab, devtools] = discovered.pages;
    let discovery = DiscoveryResult {
        popup,
        options: options_page,
        newtab,
        devtools,
        content_script: discovered.content_script.is_some(),
        background: discovered.background.is_some(),
        contents_directory: !discovered.contents.is_empty(),
        tabs_directory: !discovered.tabs.is_empty(),
    };
    if !discovery.any() {
        reporter.report(&SynthesisEvent::Warning(NO_ENTRYPOINTS_WARNING.to_string()));
    }
    complete(reporter, Phase::Discovery);

    start(reporter, Phase::ApplyToggles);
    factory.toggle_content_script(discovered.content_script, true);
    factory.toggle_background(discovered.background.as_ref(), true);
    factory.add_content_scripts_directory(discovered.contents);
    factory.add_tabs_directory(discovered.tabs);
    factory
        .toggle_popup(popup)
        .toggle_options(options_page)
        .toggle_devtools(devtools)
        .toggle_newtab(newtab);
    tracing::debug!(enabled = ?factory.capabilities().enabled(), "capabilities applied");
    complete(reporter, Phase::ApplyToggles);

    start(reporter, Phase::Write);
    factory.write(options.pretty)?;
    complete(reporter, Phase::Write);

    Ok(SynthesisReport { discovery, factory })
}

/// Run the eight discovery probes concurrently. The first failure
/// aborts the batch.
async fn discover(factory: &ManifestFactory) -> Result<Discovered> {
    let scaffolder = factory.scaffolder()?;

    let (popup, options, newtab, devtools, content_script, background, contents, tabs) = tokio::try_join!(
        scaffolder.init_template_files(EntrypointKind::Popup),
        scaffolder.init_template_files(EntrypointKind::Options),
        scaffolder.init_template_files(EntrypointKind::Newtab),
        scaffolder.init_template_files(EntrypointKind::Devtools),
        factory.probe_content_script(),
        async { Ok::<_, manifold_manifest::Error>(factory.probe_background().await) },
        factory.scan_content_scripts_directory(),
        factory.scan_tabs_directory(),
    )?;

    Ok(Discovered {
        pages: [popup, options, newtab, devtools],
        content_script,
        background,
        contents,
        tabs,
    })
}

fn start(reporter: &dyn Reporter, phase: Phase) {
    reporter.report(&SynthesisEvent::PhaseStarted(phase));
}

fn complete(reporter: &dyn Reporter, phase: Phase) {
    reporter.report(&SynthesisEvent::PhaseCompleted(phase));
}
